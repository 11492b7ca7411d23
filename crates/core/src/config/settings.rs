use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::RunnerOptions;

/// File names searched for, in order, in each directory
pub const CONFIG_FILE_NAMES: [&str; 2] = [".nunit-runner.json", "nunit-runner.json"];

impl RunnerOptions {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let options = serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse config {}: {e}", path.display()))
        })?;
        debug!("Loaded runner options from {}", path.display());
        Ok(options)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` looking for a runner configuration file
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }
}
