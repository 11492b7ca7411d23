pub mod loader;
pub mod templates;

pub use loader::{RunnerOverrides, load_runner_options};
pub use templates::create_starter_config;
