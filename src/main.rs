//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `ip_range_resolver` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use ip_range_resolver::config::Opt;
use ip_range_resolver::initialization::init_logger_with;
use ip_range_resolver::{run_lookup, Config};

fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    init_logger_with(config.log_level.clone().into(), config.log_format.clone())
        .context("Failed to initialize logger")?;

    match run_lookup(config) {
        Ok(report) => {
            // stdout may carry the CSV, so the summary goes to stderr
            eprintln!(
                "✅ Resolved {} address{} ({} city, {} country, {} ASN) in {:.1}s",
                report.total,
                if report.total == 1 { "" } else { "es" },
                report.city_hits,
                report.country_hits,
                report.asn_hits,
                report.elapsed_seconds
            );
            if let Some(path) = &report.output {
                eprintln!("Results saved in {}", path.display());
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("ip_range_resolver error: {:#}", e);
            process::exit(1);
        }
    }
}
