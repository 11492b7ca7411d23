//! NUnit result report to TeamCity service message conversion

pub mod converter;
pub mod escape;
pub mod message;

pub use converter::{
    ReportNode, TeamcityLogBuilder, create_teamcity_log, create_teamcity_log_from_file,
    create_teamcity_log_from_reader, duration_from_time,
};
pub use escape::escape;
pub use message::{MessageKind, ServiceMessage};
