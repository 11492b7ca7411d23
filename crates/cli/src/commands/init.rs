use anyhow::{Context, Result};
use nunit_teamcity_core::{Platform, Version, config::CONFIG_FILE_NAMES};
use std::{env, path::Path};
use tracing::info;

use crate::config::create_starter_config;

pub fn init_command(
    cwd: Option<&Path>,
    force: bool,
    version: Option<&str>,
    platform: Option<&str>,
) -> Result<()> {
    let project_root = match cwd {
        Some(cwd) => cwd.to_path_buf(),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let version = version.map(str::parse::<Version>).transpose()?.unwrap_or_default();
    let platform = platform
        .map(str::parse::<Platform>)
        .transpose()?
        .unwrap_or_default();

    let config_path = project_root.join(CONFIG_FILE_NAMES[0]);
    if config_path.exists() && !force {
        println!("❌ Config already exists at: {}", config_path.display());
        println!("   Use --force to overwrite");
        return Ok(());
    }

    let options = create_starter_config(version, platform);
    options
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
    info!("Created config: {}", config_path.display());

    println!("✅ Created config: {}", config_path.display());
    println!("   • runner: NUnit {} ({})", version, platform);
    println!("\n📌 Add runner flags such as \"include\", \"exclude\" or \"framework\" to the file.");
    println!("   Flags are passed to the runner in the order they appear.");

    Ok(())
}
