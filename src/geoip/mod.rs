//! IP resolution against GeoLite2 CSV datasets.
//!
//! This module provides the city/country resolver (`GeoResolver`), the ASN
//! resolver (`AsnResolver`), the `IpResolver` capability both implement, and
//! loading of a whole GeoLite2 CSV directory into a `GeoIpData` set.
//!
//! Resolvers are plain values. Callers construct them once and share them
//! (e.g. behind `Arc`) rather than reaching for process-wide state.

mod asn;
mod geo;
mod init;
mod lookup;
mod table;
mod types;

// Re-export public API
pub use asn::{build_asn_resolver, number_to_ipv4, AsnResolver};
pub use geo::{build_geo_resolver, GeoResolver};
pub use init::GeoIpData;
pub use lookup::IpEnricher;
pub use types::IpFields;

/// Resolves an IP address string to a single value.
///
/// Coverage gaps and unparseable input both yield `None`; implementations
/// never fail at query time. After construction a resolver is immutable, so
/// implementations must be shareable across threads.
pub trait IpResolver: Send + Sync {
    /// Returns the value attached to the range covering `ip`, if any.
    fn resolve(&self, ip: &str) -> Option<String>;
}
