//! Load statistics tracking.
//!
//! Resolvers are built single-threaded, so the counters are plain integers.
//! After the build the stats are read-only and travel with the resolver.

use std::collections::HashMap;
use strum::IntoEnumIterator;

use super::types::SkipReason;

/// Tally of rows seen while building one resolver.
///
/// All skip reasons are initialized to zero on creation.
#[derive(Debug, Clone)]
pub struct LoadStats {
    loaded: usize,
    replaced: usize,
    skipped: HashMap<SkipReason, usize>,
}

impl Default for LoadStats {
    fn default() -> Self {
        Self::new()
    }
}

impl LoadStats {
    /// Creates stats with every counter at zero.
    pub fn new() -> Self {
        let mut skipped = HashMap::new();
        for reason in SkipReason::iter() {
            skipped.insert(reason, 0);
        }

        LoadStats {
            loaded: 0,
            replaced: 0,
            skipped,
        }
    }

    /// Count one row that made it into the index or dictionary.
    pub fn record_loaded(&mut self) {
        self.loaded += 1;
    }

    /// Count one row whose key was already present and got overwritten.
    pub fn record_replaced(&mut self) {
        self.replaced += 1;
    }

    /// Count one skipped row.
    pub fn record_skip(&mut self, reason: SkipReason) {
        *self.skipped.entry(reason).or_insert(0) += 1;
    }

    /// Rows loaded, including those that replaced an earlier key.
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    /// Rows that overwrote an existing key.
    pub fn replaced(&self) -> usize {
        self.replaced
    }

    /// Get the count for a skip reason.
    pub fn skipped(&self, reason: SkipReason) -> usize {
        self.skipped.get(&reason).copied().unwrap_or(0)
    }

    /// Skipped rows across all reasons.
    pub fn total_skipped(&self) -> usize {
        self.skipped.values().sum()
    }

    /// One-line description of the non-zero skip counters, for logging.
    pub fn skip_summary(&self) -> String {
        let parts: Vec<String> = SkipReason::iter()
            .filter_map(|reason| {
                let count = self.skipped(reason);
                (count > 0).then(|| format!("{}: {}", reason, count))
            })
            .collect();

        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(", ")
        }
    }
}
