//! Predecessor search over disjoint address ranges.

use std::collections::BTreeMap;
use std::net::IpAddr;

use super::address::{parse_address, AddressRange, Family};

/// An ordered map from address ranges to attached values.
///
/// Stored ranges are assumed (not verified) to be disjoint within a family.
/// Under that assumption the only range that can contain an address `a` is
/// the one with the greatest start `<= a`, so a lookup is a single floor
/// query on the underlying `BTreeMap` followed by a bounds check that
/// rejects addresses falling into gaps between ranges.
///
/// Inserting a range whose `(family, start, end)` key is already present
/// replaces the previous value.
#[derive(Debug, Clone)]
pub struct RangeIndex<V> {
    entries: BTreeMap<AddressRange, V>,
}

impl<V> Default for RangeIndex<V> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }
}

impl<V> RangeIndex<V> {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a range, returning the value it replaced if the exact key
    /// was already present.
    pub fn insert(&mut self, range: AddressRange, value: V) -> Option<V> {
        self.entries.insert(range, value)
    }

    /// Returns the entry with the greatest key `<= key`, if any.
    pub fn floor(&self, key: &AddressRange) -> Option<(&AddressRange, &V)> {
        self.entries.range(..=*key).next_back()
    }

    /// Returns the value of the stored range containing `addr`.
    ///
    /// Returns `None` when `addr` precedes every range of its family, falls
    /// between two ranges, or lies past the last one.
    pub fn lookup(&self, addr: IpAddr) -> Option<&V> {
        self.lookup_entry(addr).map(|(_, value)| value)
    }

    /// Like `lookup`, but also returns the matching range.
    pub fn lookup_entry(&self, addr: IpAddr) -> Option<(&AddressRange, &V)> {
        let query = AddressRange::single(addr);
        // Probe with the largest possible end so that ranges starting exactly
        // at `addr` are candidates too.
        let probe = AddressRange::upper_probe(query.family(), query.start());
        let (candidate, value) = self.floor(&probe)?;

        if candidate.family() != query.family() || !candidate.overlaps(&query) {
            return None;
        }
        Some((candidate, value))
    }

    /// Parses `ip` and looks it up. Unparseable input is a miss, not an error.
    pub fn lookup_str(&self, ip: &str) -> Option<&V> {
        let addr = parse_address(ip).ok()?;
        self.lookup(addr)
    }

    /// Number of stored ranges.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no range is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of stored ranges in the given family.
    pub fn family_len(&self, family: Family) -> usize {
        self.entries.keys().filter(|r| r.family() == family).count()
    }
}

impl<V> FromIterator<(AddressRange, V)> for RangeIndex<V> {
    fn from_iter<I: IntoIterator<Item = (AddressRange, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
