use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::{command_command, init_command, report_command};
use crate::commands::command::CommandArgs;

#[derive(Parser, Debug)]
#[command(name = "nunit-teamcity")]
#[command(version, about, long_about = None)]
#[command(subcommand_required = true, arg_required_else_help = true)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging (written to stderr)")]
pub struct Runner {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the NUnit console command for the given test assemblies
    #[command(visible_alias = "c")]
    Command {
        /// Test assemblies, passed to the runner in the given order
        #[arg(required = true)]
        assemblies: Vec<String>,

        /// Runner configuration file (defaults to the nearest .nunit-runner.json)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Runner platform: x86 or x64
        #[arg(long)]
        platform: Option<String>,

        /// Runner version: 2.x or 3.x
        #[arg(long = "runner-version")]
        runner_version: Option<String>,

        /// NUnit install directory
        #[arg(long)]
        path: Option<String>,

        /// Print the command as JSON
        #[arg(long)]
        json: bool,

        /// Show a breakdown of the command on stderr
        #[arg(short, long)]
        verbose: bool,

        /// Do not check that the assemblies exist
        #[arg(long)]
        no_check: bool,
    },
    /// Convert an NUnit result file into TeamCity service messages
    #[command(visible_alias = "r")]
    Report {
        /// Path to the NUnit 2 format result file
        report: PathBuf,
    },
    /// Create a starter .nunit-runner.json
    Init {
        /// Directory to write the configuration to (defaults to current directory)
        #[arg(long)]
        cwd: Option<PathBuf>,

        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,

        /// Runner version: 2.x or 3.x
        #[arg(long = "runner-version")]
        runner_version: Option<String>,

        /// Runner platform: x86 or x64
        #[arg(long)]
        platform: Option<String>,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Command {
                assemblies,
                config,
                platform,
                runner_version,
                path,
                json,
                verbose,
                no_check,
            } => command_command(CommandArgs {
                assemblies,
                config,
                platform,
                runner_version,
                path,
                json,
                verbose,
                check: !no_check,
            }),
            Commands::Report { report } => report_command(&report),
            Commands::Init {
                cwd,
                force,
                runner_version,
                platform,
            } => init_command(
                cwd.as_deref(),
                force,
                runner_version.as_deref(),
                platform.as_deref(),
            ),
        }
    }
}
