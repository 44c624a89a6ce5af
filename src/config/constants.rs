//! Configuration constants.
//!
//! This module defines the GeoLite2 CSV file names looked up inside the data
//! directory and the default description columns.

/// Default directory holding the GeoLite2 CSV files
pub const DEFAULT_DATA_DIR: &str = "./geoip_data";

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "GEOIP_DATA_DIR";

// GeoLite2 city tables
/// City blocks, IPv4
pub const GEOLITE_CITY_V4_FILE: &str = "GeoLite2-City-Blocks-IPv4.csv";
/// City blocks, IPv6
pub const GEOLITE_CITY_V6_FILE: &str = "GeoLite2-City-Blocks-IPv6.csv";
/// City locations (English)
pub const GEOLITE_CITY_LOCATIONS_FILE: &str = "GeoLite2-City-Locations-en.csv";

// GeoLite2 country tables
/// Country blocks, IPv4
pub const GEOLITE_COUNTRY_V4_FILE: &str = "GeoLite2-Country-Blocks-IPv4.csv";
/// Country blocks, IPv6
pub const GEOLITE_COUNTRY_V6_FILE: &str = "GeoLite2-Country-Blocks-IPv6.csv";
/// Country locations (English)
pub const GEOLITE_COUNTRY_LOCATIONS_FILE: &str = "GeoLite2-Country-Locations-en.csv";

// Legacy GeoIP ASNum tables (IPv6 is optional)
/// ASNum ranges, IPv4
pub const GEOLITE_ASN_V4_FILE: &str = "GeoIPASNum2.csv";
/// ASNum ranges, IPv6
pub const GEOLITE_ASN_V6_FILE: &str = "GeoIPASNum2v6.csv";

/// Locations column returned by the city resolver
pub const DEFAULT_CITY_COLUMN: &str = "city_name";

/// Locations column returned by the country resolver
pub const DEFAULT_COUNTRY_COLUMN: &str = "country_name";

/// Progress is logged every this many input addresses
pub const LOGGING_INTERVAL: usize = 100_000;
