//! nunit-teamcity - NUnit console integration for TeamCity builds
//!
//! This crate provides functionality to:
//! - Build NUnit console invocations for the 2.x and 3.x flag dialects
//! - Convert NUnit 2 result reports into TeamCity service messages
//! - Load runner options from JSON configuration files
pub mod command;
pub mod config;
pub mod discovery;
pub mod error;
pub mod report;

// Re-export commonly used types
pub use error::{Error, Result};

// Re-export main API components
pub use command::{CommandBuilder, RunnerInvocation, build_command};
pub use config::{OptionValue, Platform, RunnerOptions, Version};
pub use discovery::resolve_assemblies;
pub use report::{
    ServiceMessage, create_teamcity_log, create_teamcity_log_from_file,
    create_teamcity_log_from_reader,
};
