//! Error type definitions.
//!
//! This module defines the errors returned while building resolvers and
//! initializing the application, plus the reasons a table row can be skipped.

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Errors raised while parsing addresses or building a resolver.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// An address literal did not parse.
    #[error("Malformed address: {0}")]
    MalformedAddress(String),

    /// A CIDR or start/end pair violated the range invariants.
    #[error("Malformed range: {0}")]
    MalformedRange(String),

    /// The input is shaped so that every lookup would be wrong (e.g. the
    /// description table lacks the configured column).
    #[error("Structural input error: {0}")]
    StructuralInput(String),

    /// Reading an input stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The CSV reader failed in a way that is not tied to a single row.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Why a row of an input table was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SkipReason {
    /// An address field did not parse.
    MalformedAddress,
    /// A range field parsed but violated range invariants.
    MalformedRange,
    /// The identifier column was not an integer.
    MalformedId,
    /// The row had fewer columns than required.
    MissingField,
    /// The CSV reader could not decode the record (e.g. invalid UTF-8).
    UnreadableRecord,
}

impl SkipReason {
    /// Maps a row-level parse error onto its skip reason.
    pub fn from_error(error: &ResolveError) -> Self {
        match error {
            ResolveError::MalformedAddress(_) => SkipReason::MalformedAddress,
            ResolveError::MalformedRange(_) => SkipReason::MalformedRange,
            _ => SkipReason::UnreadableRecord,
        }
    }

    /// Short human-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MalformedAddress => "malformed address",
            SkipReason::MalformedRange => "malformed range",
            SkipReason::MalformedId => "malformed id",
            SkipReason::MissingField => "missing field",
            SkipReason::UnreadableRecord => "unreadable record",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
