pub mod command;
pub mod init;
pub mod report;

pub use command::command_command;
pub use init::init_command;
pub use report::report_command;
