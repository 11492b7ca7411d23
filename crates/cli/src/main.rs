use anyhow::Result;
use clap::Parser;
use nunit_teamcity::Runner;

fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries the command or the service messages
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let runner = Runner::parse();
    runner.command.execute()
}
