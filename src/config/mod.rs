//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (GeoLite2 file names, default columns)
//! - CLI option types and parsing
//! - The library-side `Config`

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
