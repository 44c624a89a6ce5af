// Shared test helpers for writing GeoLite2-style CSV datasets to disk.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const CITY_BLOCKS_V4: &str = "\
network,geoname_id,registered_country_geoname_id,represented_country_geoname_id,is_anonymous_proxy,is_satellite_provider
1.0.0.0/24,100,2077456,,0,0
1.0.2.0/23,101,1814991,,0,0
8.8.8.0/24,,6252001,,0,0
";

pub const CITY_BLOCKS_V6: &str = "\
network,geoname_id,registered_country_geoname_id,represented_country_geoname_id,is_anonymous_proxy,is_satellite_provider
2001:db8::/32,102,2921044,,0,0
";

pub const CITY_LOCATIONS: &str = "\
geoname_id,locale_code,continent_code,continent_name,country_iso_code,country_name,city_name
100,en,OC,Oceania,AU,Australia,\"Foo\"
101,en,AS,Asia,CN,China,Fuzhou
102,en,EU,Europe,DE,Germany,Berlin
";

pub const COUNTRY_BLOCKS_V4: &str = "\
network,geoname_id,registered_country_geoname_id,represented_country_geoname_id,is_anonymous_proxy,is_satellite_provider
1.0.0.0/24,2077456,2077456,,0,0
1.0.2.0/23,1814991,1814991,,0,0
";

pub const COUNTRY_BLOCKS_V6: &str = "\
network,geoname_id,registered_country_geoname_id,represented_country_geoname_id,is_anonymous_proxy,is_satellite_provider
2001:db8::/32,2921044,2921044,,0,0
";

pub const COUNTRY_LOCATIONS: &str = "\
geoname_id,locale_code,continent_code,continent_name,country_iso_code,country_name
2077456,en,OC,Oceania,AU,Australia
1814991,en,AS,Asia,CN,China
2921044,en,EU,Europe,DE,Germany
";

pub const ASN_V4: &str = "\
16777216,16777471,AS1234
16777472,16778239,\"AS4134 Chinanet, Backbone\"
";

/// Writes a complete dataset into a fresh temporary directory.
#[allow(dead_code)] // Used by other test files
pub fn create_test_dataset() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    write_dataset(dir.path());
    dir
}

/// Writes every required GeoLite2 file into `dir`.
pub fn write_dataset(dir: &Path) {
    let files = [
        ("GeoLite2-City-Blocks-IPv4.csv", CITY_BLOCKS_V4),
        ("GeoLite2-City-Blocks-IPv6.csv", CITY_BLOCKS_V6),
        ("GeoLite2-City-Locations-en.csv", CITY_LOCATIONS),
        ("GeoLite2-Country-Blocks-IPv4.csv", COUNTRY_BLOCKS_V4),
        ("GeoLite2-Country-Blocks-IPv6.csv", COUNTRY_BLOCKS_V6),
        ("GeoLite2-Country-Locations-en.csv", COUNTRY_LOCATIONS),
        ("GeoIPASNum2.csv", ASN_V4),
    ];
    for (name, content) in files {
        fs::write(dir.join(name), content).expect("Failed to write dataset file");
    }
}
