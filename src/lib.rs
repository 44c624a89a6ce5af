//! ip_range_resolver library: IP address range resolution
//!
//! This library resolves IP addresses to the GeoLite2 city, country and
//! autonomous system that cover them. Range tables are loaded once into an
//! ordered index; each lookup is a single predecessor search.
//!
//! # Example
//!
//! ```no_run
//! use ip_range_resolver::{GeoIpData, IpResolver};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let data = GeoIpData::load(Path::new("./geoip_data"), "city_name", "country_name")?;
//!
//! if let Some(city) = data.city.resolve("1.0.0.10") {
//!     println!("city: {}", city);
//! }
//! println!("asn: {:?}", data.asn.resolve("1.0.0.10"));
//! # Ok(())
//! # }
//! ```
//!
//! Resolvers are immutable after construction and can be shared across
//! threads (e.g. behind `Arc`) without locking.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
mod geoip;
pub mod initialization;
mod range;
mod run;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, LoadStats, ResolveError, SkipReason};
pub use geoip::{
    build_asn_resolver, build_geo_resolver, number_to_ipv4, AsnResolver, GeoIpData, GeoResolver,
    IpEnricher, IpFields, IpResolver,
};
pub use range::{parse_address, AddressRange, Family, RangeIndex};
pub use run::{enrich_stream, run_lookup, LookupReport};
