//! Error types and load statistics.
//!
//! This module provides:
//! - Error type definitions (`ResolveError`, `InitializationError`)
//! - Row-level skip reasons recorded while loading range tables
//! - `LoadStats`, the per-resolver tally of loaded and skipped rows
//!
//! Row-level problems in input tables are never returned as errors. They are
//! counted under a `SkipReason` and loading continues. Only structural
//! problems (a missing description column, an unreadable stream) abort a build.

mod stats;
mod types;

// Re-export public API
pub use stats::LoadStats;
pub use types::{InitializationError, ResolveError, SkipReason};
