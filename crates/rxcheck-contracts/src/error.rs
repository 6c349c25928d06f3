//! Error types shared by every RXCHECK crate.
//!
//! All fallible operations return `RxResult<T>`. Variants carry enough
//! context for the CLI to print an actionable message without re-deriving
//! what the caller asked for.

use thiserror::Error;

/// The unified error type for RXCHECK.
#[derive(Debug, Error)]
pub enum RxError {
    /// Interaction analysis needs at least two drug entries.
    ///
    /// This is a validation signal for the caller, not a fault: the matcher
    /// is never invoked when fewer than two entries are present.
    #[error("at least two drugs are required for interaction analysis, got {count}")]
    NotEnoughDrugs { count: usize },

    /// The drug has no record in the reference formulary.
    #[error("drug '{name}' is not in the reference formulary")]
    UnknownDrug { name: String },

    /// No entry with this id exists in the medication list.
    #[error("no drug entry with id '{id}'")]
    EntryNotFound { id: String },

    /// Caller-supplied input failed validation (blank name, bad weight, empty text).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The formulary document is unreadable, malformed, or inconsistent.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the RXCHECK crates.
pub type RxResult<T> = Result<T, RxError>;
