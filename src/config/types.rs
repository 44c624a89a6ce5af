//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DATA_DIR_ENV, DEFAULT_CITY_COLUMN, DEFAULT_COUNTRY_COLUMN, DEFAULT_DATA_DIR,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Resolve addresses listed in a file
/// ip_range_resolver ips.txt --data-dir ./GeoLite2
///
/// # Read from stdin, write CSV to a file
/// cat ips.txt | ip_range_resolver --output enriched.csv
///
/// # Return ISO codes instead of names
/// ip_range_resolver ips.txt --country-column country_iso_code
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ip_range_resolver",
    about = "Resolves IP addresses to city, country and ASN using GeoLite2 CSV data."
)]
pub struct Opt {
    /// File with one IP address per line (reads stdin if omitted)
    #[arg(value_parser)]
    pub input: Option<PathBuf>,

    /// Directory containing the GeoLite2 CSV files
    #[arg(long, value_parser, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Locations column returned for the city field
    #[arg(long, default_value = DEFAULT_CITY_COLUMN)]
    pub city_column: String,

    /// Locations column returned for the country field
    #[arg(long, default_value = DEFAULT_COUNTRY_COLUMN)]
    pub country_column: String,

    /// CSV output path (writes stdout if omitted)
    #[arg(long, value_parser)]
    pub output: Option<PathBuf>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without going through `Opt`.
///
/// # Examples
///
/// ```no_run
/// use ip_range_resolver::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     input: Some(PathBuf::from("ips.txt")),
///     data_dir: PathBuf::from("/srv/geolite2"),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// File to read IP addresses from (stdin if `None`)
    pub input: Option<PathBuf>,

    /// Directory holding the GeoLite2 CSV files
    pub data_dir: PathBuf,

    /// Locations column for the city field
    pub city_column: String,

    /// Locations column for the country field
    pub country_column: String,

    /// CSV output path (stdout if `None`)
    pub output: Option<PathBuf>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            city_column: DEFAULT_CITY_COLUMN.to_string(),
            country_column: DEFAULT_COUNTRY_COLUMN.to_string(),
            output: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            input: opt.input,
            data_dir: opt.data_dir,
            city_column: opt.city_column,
            country_column: opt.country_column,
            output: opt.output,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}
