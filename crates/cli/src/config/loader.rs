use anyhow::{Context, Result};
use nunit_teamcity_core::{Platform, RunnerOptions, Version};
use std::path::Path;
use tracing::{debug, info};

/// Values given on the command line that take precedence over the config file
#[derive(Debug, Default, Clone)]
pub struct RunnerOverrides {
    pub platform: Option<String>,
    pub version: Option<String>,
    pub path: Option<String>,
}

impl RunnerOverrides {
    pub fn apply(&self, mut options: RunnerOptions) -> Result<RunnerOptions> {
        if let Some(platform) = &self.platform {
            options.platform = platform.parse::<Platform>()?;
        }
        if let Some(version) = &self.version {
            options.version = version.parse::<Version>()?;
        }
        if let Some(path) = &self.path {
            options.path = Some(path.clone());
        }
        Ok(options)
    }
}

/// Load runner options from `explicit`, else from the nearest config file above
/// `cwd`, else defaults; then apply the overrides
pub fn load_runner_options(
    explicit: Option<&Path>,
    cwd: &Path,
    overrides: &RunnerOverrides,
) -> Result<RunnerOptions> {
    let options = match explicit {
        Some(path) => RunnerOptions::load_from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => match RunnerOptions::find_config_file(cwd) {
            Some(path) => {
                info!("Using config {}", path.display());
                RunnerOptions::load_from_file(&path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?
            }
            None => {
                debug!("No config file found from {}, using defaults", cwd.display());
                RunnerOptions::default()
            }
        },
    };

    overrides.apply(options)
}
