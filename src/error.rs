//! Custom error types for spendcmp
//!
//! All failures happen at the input boundary: the comparison pipeline itself
//! is total over validated tables, so the error surface is small.

use thiserror::Error;

/// The main error type for spendcmp operations
#[derive(Error, Debug)]
pub enum SpendError {
    /// A vertical label appeared more than once within one dataset
    #[error("duplicate vertical in {dataset} data: {vertical}")]
    DuplicateVertical { dataset: String, vertical: String },

    /// A period amount was negative (the fixture data never is, but
    /// construction validates in case rows ever come from elsewhere)
    #[error("invalid amount for {vertical} in {dataset} {period}: {amount} is negative")]
    InvalidAmount {
        dataset: String,
        vertical: String,
        period: String,
        amount: String,
    },

    /// Export errors (CSV/JSON serialization or the underlying writer)
    #[error("export error: {0}")]
    Export(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl SpendError {
    /// Check if this is a duplicate-vertical error
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateVertical { .. })
    }

    /// Check if this is an invalid-amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount { .. })
    }
}

impl From<std::io::Error> for SpendError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<csv::Error> for SpendError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<serde_json::Error> for SpendError {
    fn from(err: serde_json::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for spendcmp operations
pub type SpendResult<T> = Result<T, SpendError>;
