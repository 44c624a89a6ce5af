//! GeoIP data structures.
//!
//! This module defines the per-record fields derived from an IP address.

use serde::Serialize;

/// Fields derived from one IP address.
///
/// Each field holds the resolved value, or the empty string when the address
/// was absent or not covered by the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IpFields {
    /// City name (or the configured city column)
    pub ip_city: String,
    /// Country name (or the configured country column)
    pub ip_country: String,
    /// Autonomous system label
    pub ip_asn: String,
}

impl IpFields {
    /// True if at least one field resolved.
    pub fn any_resolved(&self) -> bool {
        !(self.ip_city.is_empty() && self.ip_country.is_empty() && self.ip_asn.is_empty())
    }
}
