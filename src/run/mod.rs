//! Batch lookup run.
//!
//! Loads a GeoLite2 dataset, resolves every address of the input list and
//! writes one CSV row per address.

mod input;

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::time::Instant;

use crate::config::{Config, LOGGING_INTERVAL};
use crate::geoip::{GeoIpData, IpEnricher, IpFields};

use input::read_addresses;

/// Summary of a lookup run.
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    /// Number of addresses read from the input
    pub total: usize,
    /// Addresses with a city
    pub city_hits: usize,
    /// Addresses with a country
    pub country_hits: usize,
    /// Addresses with an ASN
    pub asn_hits: usize,
    /// Output path (`None` for stdout)
    pub output: Option<PathBuf>,
    /// Elapsed time in seconds, including dataset loading
    pub elapsed_seconds: f64,
}

const OUTPUT_HEADER: [&str; 4] = ["ip", "ip_city", "ip_country", "ip_asn"];

#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    ip: &'a str,
    ip_city: &'a str,
    ip_country: &'a str,
    ip_asn: &'a str,
}

/// Resolves every address listed in `config.input` and writes CSV output.
///
/// # Errors
///
/// This function will return an error if:
/// - The GeoLite2 dataset cannot be loaded (missing file, missing column)
/// - The input cannot be read or the output cannot be written
pub fn run_lookup(config: Config) -> Result<LookupReport> {
    let started = Instant::now();

    let enricher = GeoIpData::load(&config.data_dir, &config.city_column, &config.country_column)
        .context("Failed to load GeoIP data")?
        .into_enricher();

    let reader: Box<dyn BufRead> = match &config.input {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("Failed to open input file {}", path.display())
        })?)),
        None => Box::new(io::stdin().lock()),
    };

    let writer: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(File::create(path).with_context(|| {
            format!("Failed to create output file {}", path.display())
        })?),
        None => Box::new(io::stdout().lock()),
    };

    let mut report = enrich_stream(&enricher, reader, writer)?;
    report.output = config.output;
    report.elapsed_seconds = started.elapsed().as_secs_f64();
    Ok(report)
}

/// Resolves every address of `reader` and writes `ip,ip_city,ip_country,ip_asn` rows.
///
/// The header row is written even when `reader` yields no addresses.
/// `output` and `elapsed_seconds` of the returned report are left for the caller.
pub fn enrich_stream<R: BufRead, W: Write>(
    enricher: &IpEnricher,
    reader: R,
    writer: W,
) -> Result<LookupReport> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer
        .write_record(OUTPUT_HEADER)
        .context("Failed to write output header")?;

    let mut report = LookupReport {
        total: 0,
        city_hits: 0,
        country_hits: 0,
        asn_hits: 0,
        output: None,
        elapsed_seconds: 0.0,
    };

    for ip in read_addresses(reader) {
        let ip = ip.context("Failed to read input line")?;
        let fields = enricher.derive(Some(&ip));
        tally(&mut report, &fields);

        csv_writer
            .serialize(OutputRow {
                ip: &ip,
                ip_city: &fields.ip_city,
                ip_country: &fields.ip_country,
                ip_asn: &fields.ip_asn,
            })
            .context("Failed to write output row")?;

        if report.total % LOGGING_INTERVAL == 0 {
            info!("Resolved {} addresses", report.total);
        }
    }

    csv_writer.flush().context("Failed to flush output")?;

    info!(
        "Resolved {} addresses: {} with city, {} with country, {} with ASN",
        report.total, report.city_hits, report.country_hits, report.asn_hits
    );
    Ok(report)
}

fn tally(report: &mut LookupReport, fields: &IpFields) {
    report.total += 1;
    if !fields.ip_city.is_empty() {
        report.city_hits += 1;
    }
    if !fields.ip_country.is_empty() {
        report.country_hits += 1;
    }
    if !fields.ip_asn.is_empty() {
        report.asn_hits += 1;
    }
}
