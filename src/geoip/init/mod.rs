//! GeoIP dataset initialization and loading.
//!
//! This module loads the city, country and ASN resolvers from a directory
//! holding the GeoLite2 CSV files under their standard names.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::config::{
    GEOLITE_ASN_V4_FILE, GEOLITE_ASN_V6_FILE, GEOLITE_CITY_LOCATIONS_FILE, GEOLITE_CITY_V4_FILE,
    GEOLITE_CITY_V6_FILE, GEOLITE_COUNTRY_LOCATIONS_FILE, GEOLITE_COUNTRY_V4_FILE,
    GEOLITE_COUNTRY_V6_FILE,
};
use crate::geoip::{AsnResolver, GeoResolver, IpEnricher};

/// The three resolvers built from one GeoLite2 CSV directory.
#[derive(Debug, Clone)]
pub struct GeoIpData {
    /// City-granularity resolver
    pub city: GeoResolver,
    /// Country-granularity resolver
    pub country: GeoResolver,
    /// ASN resolver
    pub asn: AsnResolver,
}

impl GeoIpData {
    /// Loads all resolvers from `dir`.
    ///
    /// # Arguments
    ///
    /// * `dir` - Directory containing the GeoLite2 CSV files
    /// * `city_column` - Locations column returned by the city resolver
    /// * `country_column` - Locations column returned by the country resolver
    ///
    /// # Errors
    ///
    /// Fails if a required file is missing or unreadable, or if a locations
    /// table lacks the requested column. `GeoIPASNum2v6.csv` is optional.
    pub fn load(dir: &Path, city_column: &str, country_column: &str) -> Result<Self> {
        log::info!("Loading GeoIP data from {}", dir.display());
        let started = Instant::now();

        let city = GeoResolver::build(
            open_table(dir, GEOLITE_CITY_V4_FILE)?,
            open_table(dir, GEOLITE_CITY_V6_FILE)?,
            open_table(dir, GEOLITE_CITY_LOCATIONS_FILE)?,
            city_column,
        )
        .context("Failed to build city resolver")?;

        let country = GeoResolver::build(
            open_table(dir, GEOLITE_COUNTRY_V4_FILE)?,
            open_table(dir, GEOLITE_COUNTRY_V6_FILE)?,
            open_table(dir, GEOLITE_COUNTRY_LOCATIONS_FILE)?,
            country_column,
        )
        .context("Failed to build country resolver")?;

        let asn = AsnResolver::build(
            open_table(dir, GEOLITE_ASN_V4_FILE)?,
            open_optional_table(dir, GEOLITE_ASN_V6_FILE)?,
        )
        .context("Failed to build ASN resolver")?;

        log::info!(
            "GeoIP data loaded in {:.1}s ({} city ranges, {} country ranges, {} ASN ranges)",
            started.elapsed().as_secs_f64(),
            city.range_count(),
            country.range_count(),
            asn.range_count()
        );

        Ok(Self { city, country, asn })
    }

    /// Moves the resolvers behind `Arc`s and wires them into an enricher.
    pub fn into_enricher(self) -> IpEnricher {
        IpEnricher::new(Arc::new(self.city), Arc::new(self.country), Arc::new(self.asn))
    }
}

fn open_table(dir: &Path, name: &str) -> Result<BufReader<File>> {
    let path = dir.join(name);
    let file = File::open(&path)
        .with_context(|| format!("Failed to open GeoIP table {}", path.display()))?;
    Ok(BufReader::new(file))
}

fn open_optional_table(dir: &Path, name: &str) -> Result<Box<dyn Read>> {
    let path = dir.join(name);
    if !path.exists() {
        log::debug!("Optional GeoIP table {} not present", path.display());
        return Ok(Box::new(io::empty()));
    }
    Ok(Box::new(open_table(dir, name)?))
}
