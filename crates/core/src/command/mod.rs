//! Runner command generation

pub mod builder;
pub mod dialect;
pub mod invocation;

// Re-export commonly used types
pub use builder::{CommandBuilder, build_command};
pub use invocation::RunnerInvocation;
