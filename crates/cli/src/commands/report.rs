use anyhow::{Context, Result};
use nunit_teamcity_core::create_teamcity_log_from_file;
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

pub fn report_command(report: &Path) -> Result<()> {
    // The whole report is converted before anything is printed, so a broken
    // report never produces a partial log
    let log = create_teamcity_log_from_file(report)
        .with_context(|| format!("Failed to convert report {}", report.display()))?;
    info!("Writing {} service messages", log.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for message in &log {
        writeln!(out, "{message}").context("Failed to write service message")?;
    }
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
