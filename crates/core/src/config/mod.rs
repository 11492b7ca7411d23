//! Runner configuration: typed options and configuration files

mod options;
mod settings;

pub use options::{OptionValue, Platform, RunnerOptions, Version};
pub use settings::CONFIG_FILE_NAMES;
