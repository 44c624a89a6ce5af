//! ASN resolution from GeoIP ASNum CSV tables.
//!
//! The IPv4 table has no header and stores range bounds as decimal
//! integers: `16777216,16777471,"AS1234 Example"`. Labels are attached to
//! ranges directly, with no id indirection.

use std::io::Read;
use std::net::{IpAddr, Ipv4Addr};

use log::{debug, info};

use super::table;
use super::IpResolver;
use crate::error_handling::{LoadStats, ResolveError, SkipReason};
use crate::range::{parse_address, AddressRange, Family, RangeIndex};

/// Resolves addresses to autonomous-system labels.
#[derive(Debug, Clone)]
pub struct AsnResolver {
    index: RangeIndex<String>,
    stats: LoadStats,
}

/// Converts a decimal range bound into an IPv4 address, most significant byte first.
pub fn number_to_ipv4(number: u32) -> Ipv4Addr {
    Ipv4Addr::from(number.to_be_bytes())
}

impl AsnResolver {
    /// Builds a resolver from the IPv4 and IPv6 ASN tables.
    ///
    /// IPv4 rows are `[start, end, label]` with numeric bounds. IPv6 rows use
    /// the same layout with textual address bounds. Pass `std::io::empty()`
    /// when no IPv6 data is available.
    ///
    /// # Errors
    ///
    /// Returns an I/O/CSV error if a stream cannot be read. Malformed rows are
    /// skipped and counted in `stats()`.
    pub fn build<R4, R6>(ipv4_table: R4, ipv6_table: R6) -> Result<Self, ResolveError>
    where
        R4: Read,
        R6: Read,
    {
        let mut stats = LoadStats::new();
        let mut index = RangeIndex::new();

        load_table(ipv4_table, "IPv4 ASN", &mut index, &mut stats, |start, end| {
            let start = start
                .parse::<u32>()
                .map_err(|_| ResolveError::MalformedAddress(start.to_string()))?;
            let end = end
                .parse::<u32>()
                .map_err(|_| ResolveError::MalformedAddress(end.to_string()))?;
            AddressRange::from_bounds(
                IpAddr::V4(number_to_ipv4(start)),
                IpAddr::V4(number_to_ipv4(end)),
            )
        })?;

        load_table(ipv6_table, "IPv6 ASN", &mut index, &mut stats, |start, end| {
            AddressRange::from_bounds(parse_address(start)?, parse_address(end)?)
        })?;

        info!(
            "Built ASN resolver: {} IPv4 + {} IPv6 ranges, {} replaced, skipped rows ({})",
            index.family_len(Family::V4),
            index.family_len(Family::V6),
            stats.replaced(),
            stats.skip_summary()
        );

        Ok(Self { index, stats })
    }

    /// Returns the label of the range covering `addr`.
    pub fn lookup(&self, addr: IpAddr) -> Option<&str> {
        self.index.lookup(addr).map(String::as_str)
    }

    /// Number of ranges in the index.
    pub fn range_count(&self) -> usize {
        self.index.len()
    }

    /// Row counts recorded while building.
    pub fn stats(&self) -> &LoadStats {
        &self.stats
    }
}

impl IpResolver for AsnResolver {
    fn resolve(&self, ip: &str) -> Option<String> {
        let addr = parse_address(ip).ok()?;
        self.lookup(addr).map(str::to_owned)
    }
}

fn load_table<R, F>(
    input: R,
    table_name: &str,
    index: &mut RangeIndex<String>,
    stats: &mut LoadStats,
    parse_bounds: F,
) -> Result<(), ResolveError>
where
    R: Read,
    F: Fn(&str, &str) -> Result<AddressRange, ResolveError>,
{
    let mut reader = table::reader(input, false);

    table::for_each_record(&mut reader, table_name, stats, |record, stats| {
        let Some([start, end, label]) = table::fields(record, [0, 1, 2]) else {
            stats.record_skip(SkipReason::MissingField);
            return;
        };

        let range = match parse_bounds(start, end) {
            Ok(range) => range,
            Err(e) => {
                debug!("Skipping row in {}: {}", table_name, e);
                stats.record_skip(SkipReason::from_error(&e));
                return;
            }
        };

        if let Some(previous) = index.insert(range, label.to_string()) {
            debug!(
                "Duplicate range {} in {}: '{}' replaced by '{}'",
                range, table_name, previous, label
            );
            stats.record_replaced();
        }
        stats.record_loaded();
    })
}

/// Builds an `AsnResolver`; see [`AsnResolver::build`].
pub fn build_asn_resolver<R4, R6>(ipv4_table: R4, ipv6_table: R6) -> Result<AsnResolver, ResolveError>
where
    R4: Read,
    R6: Read,
{
    AsnResolver::build(ipv4_table, ipv6_table)
}
