use anyhow::{Context, Result};
use nunit_teamcity_core::{CommandBuilder, resolve_assemblies};
use std::env;
use std::path::PathBuf;
use tracing::debug;

use crate::config::{RunnerOverrides, load_runner_options};
use crate::display::print_invocation_breakdown;

/// Arguments of the `command` subcommand
#[derive(Debug, Clone)]
pub struct CommandArgs {
    pub assemblies: Vec<String>,
    pub config: Option<PathBuf>,
    pub platform: Option<String>,
    pub runner_version: Option<String>,
    pub path: Option<String>,
    pub json: bool,
    pub verbose: bool,
    pub check: bool,
}

pub fn command_command(args: CommandArgs) -> Result<()> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let overrides = RunnerOverrides {
        platform: args.platform,
        version: args.runner_version,
        path: args.path,
    };
    let options = load_runner_options(args.config.as_deref(), &cwd, &overrides)?;
    debug!("Runner options: {:?}", options);

    let assemblies = if args.check {
        resolve_assemblies(&args.assemblies).context("Failed to resolve test assemblies")?
    } else {
        args.assemblies
    };

    let invocation = CommandBuilder::new(options).build_command(&assemblies);

    if args.verbose {
        print_invocation_breakdown(&invocation, assemblies.len());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&invocation)
            .context("Failed to serialize command")?;
        println!("{json}");
    } else {
        println!("{}", invocation.to_shell_command());
    }

    Ok(())
}
