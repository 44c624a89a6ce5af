//! Tests for CLI option parsing.

use clap::Parser;
use ip_range_resolver::config::Opt;
use ip_range_resolver::{Config, LogFormat, LogLevel};
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let opt = Opt::try_parse_from(["ip_range_resolver", "--data-dir", "./data"]).unwrap();
    assert!(opt.input.is_none());
    assert!(opt.output.is_none());
    assert_eq!(opt.city_column, "city_name");
    assert_eq!(opt.country_column, "country_name");
    assert!(matches!(opt.log_level, LogLevel::Info));
    assert!(matches!(opt.log_format, LogFormat::Plain));
}

#[test]
fn test_all_options() {
    let opt = Opt::try_parse_from([
        "ip_range_resolver",
        "ips.txt",
        "--data-dir",
        "/srv/geolite2",
        "--city-column",
        "subdivision_1_name",
        "--country-column",
        "country_iso_code",
        "--output",
        "out.csv",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .unwrap();

    let config = Config::from(opt);
    assert_eq!(config.input, Some(PathBuf::from("ips.txt")));
    assert_eq!(config.data_dir, PathBuf::from("/srv/geolite2"));
    assert_eq!(config.city_column, "subdivision_1_name");
    assert_eq!(config.country_column, "country_iso_code");
    assert_eq!(config.output, Some(PathBuf::from("out.csv")));
    assert!(matches!(config.log_level, LogLevel::Debug));
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_invalid_log_level_rejected() {
    let result = Opt::try_parse_from(["ip_range_resolver", "--log-level", "verbose"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_log_format_rejected() {
    let result = Opt::try_parse_from(["ip_range_resolver", "--log-format", "xml"]);
    assert!(result.is_err());
}
