//! City and country resolution from GeoLite2 CSV tables.
//!
//! Block tables map ranges to geoname ids; a locations table maps geoname
//! ids to human-readable columns. Lookups go range -> id -> description.

use std::collections::HashMap;
use std::io::Read;
use std::net::IpAddr;

use log::{debug, info};

use super::table;
use super::IpResolver;
use crate::error_handling::{LoadStats, ResolveError, SkipReason};
use crate::range::{parse_address, AddressRange, Family, RangeIndex};

/// Resolves addresses to one description column of a locations table.
///
/// Used at both city and country granularity; only the input tables and the
/// selected column differ.
#[derive(Debug, Clone)]
pub struct GeoResolver {
    index: RangeIndex<u32>,
    descriptions: HashMap<u32, String>,
    column: String,
    stats: LoadStats,
}

impl GeoResolver {
    /// Builds a resolver from IPv4 and IPv6 block tables and a locations table.
    ///
    /// Block tables have a header row followed by `[network, geoname_id, ...]`.
    /// The locations table's header names its columns; `column` selects the
    /// one returned by lookups.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::StructuralInput` if the locations header lacks
    /// `column`, or an I/O/CSV error if a stream cannot be read. Malformed
    /// rows are skipped and counted in `stats()`.
    pub fn build<R4, R6, RD>(
        ipv4_blocks: R4,
        ipv6_blocks: R6,
        locations: RD,
        column: &str,
    ) -> Result<Self, ResolveError>
    where
        R4: Read,
        R6: Read,
        RD: Read,
    {
        let mut stats = LoadStats::new();
        let mut index = RangeIndex::new();

        load_blocks(ipv4_blocks, "IPv4 blocks", &mut index, &mut stats)?;
        load_blocks(ipv6_blocks, "IPv6 blocks", &mut index, &mut stats)?;
        let descriptions = load_descriptions(locations, column, &mut stats)?;

        info!(
            "Built {} resolver: {} IPv4 + {} IPv6 ranges, {} descriptions, {} replaced, skipped rows ({})",
            column,
            index.family_len(Family::V4),
            index.family_len(Family::V6),
            descriptions.len(),
            stats.replaced(),
            stats.skip_summary()
        );

        Ok(Self {
            index,
            descriptions,
            column: column.to_string(),
            stats,
        })
    }

    /// Returns the description for `addr`, if a range covers it and its id
    /// has a description.
    pub fn lookup(&self, addr: IpAddr) -> Option<&str> {
        let id = self.index.lookup(addr)?;
        self.descriptions.get(id).map(String::as_str)
    }

    /// Returns the geoname id of the range covering `addr`.
    pub fn lookup_id(&self, addr: IpAddr) -> Option<u32> {
        self.index.lookup(addr).copied()
    }

    /// Name of the description column this resolver returns.
    pub fn column(&self) -> &str {
        &self.column
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

impl IpResolver for GeoResolver {
    fn resolve(&self, ip: &str) -> Option<String> {
        let addr = parse_address(ip).ok()?;
        self.lookup(addr).map(str::to_owned)
    }
}

fn load_blocks<R: Read>(
    input: R,
    table_name: &str,
    index: &mut RangeIndex<u32>,
    stats: &mut LoadStats,
) -> Result<(), ResolveError> {
    let mut reader = table::reader(input, true);

    table::for_each_record(&mut reader, table_name, stats, |record, stats| {
        let Some([network, id]) = table::fields(record, [0, 1]) else {
            stats.record_skip(SkipReason::MissingField);
            return;
        };

        // Rows without a geoname id (e.g. only a registered country) are expected
        let Ok(id) = id.parse::<u32>() else {
            stats.record_skip(SkipReason::MalformedId);
            return;
        };

        let range = match network.parse::<AddressRange>() {
            Ok(range) => range,
            Err(e) => {
                debug!("Skipping row in {}: {}", table_name, e);
                stats.record_skip(SkipReason::from_error(&e));
                return;
            }
        };

        if let Some(previous) = index.insert(range, id) {
            debug!(
                "Duplicate range {} in {}: id {} replaced by {}",
                range, table_name, previous, id
            );
            stats.record_replaced();
        }
        stats.record_loaded();
    })
}

fn load_descriptions<R: Read>(
    input: R,
    column: &str,
    stats: &mut LoadStats,
) -> Result<HashMap<u32, String>, ResolveError> {
    let mut reader = table::reader(input, true);

    let column_idx = reader
        .headers()?
        .iter()
        .position(|name| name == column)
        .ok_or_else(|| {
            ResolveError::StructuralInput(format!(
                "description table header has no column named '{}'",
                column
            ))
        })?;

    let mut descriptions = HashMap::new();
    table::for_each_record(&mut reader, "descriptions", stats, |record, stats| {
        let Some([id, value]) = table::fields(record, [0, column_idx]) else {
            stats.record_skip(SkipReason::MissingField);
            return;
        };
        let Ok(id) = id.parse::<u32>() else {
            stats.record_skip(SkipReason::MalformedId);
            return;
        };
        descriptions.insert(id, value.to_string());
    })?;

    Ok(descriptions)
}

/// Builds a `GeoResolver`; see [`GeoResolver::build`].
pub fn build_geo_resolver<R4, R6, RD>(
    ipv4_blocks: R4,
    ipv6_blocks: R6,
    locations: RD,
    column: &str,
) -> Result<GeoResolver, ResolveError>
where
    R4: Read,
    R6: Read,
    RD: Read,
{
    GeoResolver::build(ipv4_blocks, ipv6_blocks, locations, column)
}

#[cfg(test)]
mod tests {
    use super::*;

    const V4_BLOCKS: &str = "\
network,geoname_id,registered_country_geoname_id
1.0.0.0/24,100,200
1.0.2.0/23,101,200
1.0.8.0/21,,200
";

    const V6_BLOCKS: &str = "\
network,geoname_id,registered_country_geoname_id
2001:db8::/32,102,200
";

    const LOCATIONS: &str = "\
geoname_id,locale_code,country_name,city_name
100,en,Australia,\"Foo\"
101,en,China,Fuzhou
102,en,Germany,\"Berlin, Mitte\"
";

    fn resolver() -> GeoResolver {
        GeoResolver::build(
            V4_BLOCKS.as_bytes(),
            V6_BLOCKS.as_bytes(),
            LOCATIONS.as_bytes(),
            "city_name",
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_city() {
        let geo = resolver();
        assert_eq!(geo.resolve("1.0.0.10").as_deref(), Some("Foo"));
        assert_eq!(geo.resolve("1.0.3.255").as_deref(), Some("Fuzhou"));
        assert_eq!(geo.resolve("2001:db8::42").as_deref(), Some("Berlin, Mitte"));
        // 1.0.8.0/21 has no geoname id
        assert_eq!(geo.index.family_len(Family::V4), 2);
        assert_eq!(geo.index.family_len(Family::V6), 1);
    }

    #[test]
    fn test_resolve_other_column() {
        let geo = GeoResolver::build(
            V4_BLOCKS.as_bytes(),
            V6_BLOCKS.as_bytes(),
            LOCATIONS.as_bytes(),
            "country_name",
        )
        .unwrap();
        assert_eq!(geo.resolve("1.0.0.10").as_deref(), Some("Australia"));
        assert_eq!(geo.column(), "country_name");
    }

    #[test]
    fn test_resolve_misses() {
        let geo = resolver();
        // gap between 1.0.0.0/24 and 1.0.2.0/23
        assert_eq!(geo.resolve("1.0.1.1"), None);
        // block without a geoname id was skipped
        assert_eq!(geo.resolve("1.0.8.1"), None);
        assert_eq!(geo.resolve("not an ip"), None);
        assert_eq!(geo.resolve(""), None);
    }

    #[test]
    fn test_missing_column_is_structural() {
        let result = GeoResolver::build(
            V4_BLOCKS.as_bytes(),
            V6_BLOCKS.as_bytes(),
            LOCATIONS.as_bytes(),
            "subdivision_1_name",
        );
        assert!(matches!(result, Err(ResolveError::StructuralInput(_))));
    }

    #[test]
    fn test_empty_locations_is_structural() {
        let result = GeoResolver::build(
            V4_BLOCKS.as_bytes(),
            V6_BLOCKS.as_bytes(),
            "".as_bytes(),
            "city_name",
        );
        assert!(matches!(result, Err(ResolveError::StructuralInput(_))));
    }

    #[test]
    fn test_malformed_rows_are_skipped_and_counted() {
        let blocks = "\
network,geoname_id
1.0.0.0/24,100
bogus/24,100
1.0.1.0/40,100
999.1.1.1,100
lonely
";
        let locations = "\
geoname_id,city_name
100,Foo
abc,Bar
101
";
        let geo = GeoResolver::build(
            blocks.as_bytes(),
            "".as_bytes(),
            locations.as_bytes(),
            "city_name",
        )
        .unwrap();

        assert_eq!(geo.range_count(), 1);
        let stats = geo.stats();
        assert_eq!(stats.loaded(), 1);
        assert_eq!(stats.skipped(SkipReason::MalformedRange), 2);
        assert_eq!(stats.skipped(SkipReason::MalformedAddress), 1);
        assert_eq!(stats.skipped(SkipReason::MissingField), 2);
        assert_eq!(stats.skipped(SkipReason::MalformedId), 1);
        assert_eq!(geo.resolve("1.0.0.1").as_deref(), Some("Foo"));
    }

    #[test]
    fn test_id_without_description_is_a_miss() {
        let blocks = "network,geoname_id\n5.0.0.0/8,999\n";
        let geo = GeoResolver::build(
            blocks.as_bytes(),
            "".as_bytes(),
            LOCATIONS.as_bytes(),
            "city_name",
        )
        .unwrap();
        assert_eq!(geo.lookup_id("5.1.2.3".parse().unwrap()), Some(999));
        assert_eq!(geo.resolve("5.1.2.3"), None);
    }

    #[test]
    fn test_duplicate_range_last_wins() {
        let blocks = "network,geoname_id\n1.0.0.0/24,100\n1.0.0.0/24,101\n";
        let geo = GeoResolver::build(
            blocks.as_bytes(),
            "".as_bytes(),
            LOCATIONS.as_bytes(),
            "city_name",
        )
        .unwrap();
        assert_eq!(geo.resolve("1.0.0.1").as_deref(), Some("Fuzhou"));
        assert_eq!(geo.stats().replaced(), 1);
    }

    #[test]
    fn test_v6_query_against_v4_only_data() {
        let geo = GeoResolver::build(
            V4_BLOCKS.as_bytes(),
            "".as_bytes(),
            LOCATIONS.as_bytes(),
            "city_name",
        )
        .unwrap();
        // ::100:a has the same magnitude as 1.0.0.10
        assert_eq!(geo.resolve("::100:a"), None);
    }
}
