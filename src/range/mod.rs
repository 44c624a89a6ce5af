//! Ordered IP address ranges.
//!
//! This module provides the two building blocks used by every resolver:
//! - `AddressRange`: one contiguous span of IPv4 or IPv6 address space
//! - `RangeIndex`: an ordered map from disjoint ranges to attached values,
//!   answering "which stored range contains this address" in O(log n)

mod address;
mod index;

// Re-export public API
pub use address::{parse_address, AddressRange, Family};
pub use index::RangeIndex;
