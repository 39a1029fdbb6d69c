//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `sitemap_status` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use sitemap_status::initialization::init_logger_with;
use sitemap_status::{run, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run(config).await {
        Ok(report) => {
            match (&report.output, &report.rendered) {
                (_, Some(rendered)) => print!("{}", rendered),
                (Some(path), None) => eprintln!(
                    "Wrote snapshot for {} site{} to {}",
                    report.sites,
                    if report.sites == 1 { "" } else { "s" },
                    path.display()
                ),
                (None, None) => {}
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("sitemap_status error: {:#}", e);
            process::exit(1);
        }
    }
}
