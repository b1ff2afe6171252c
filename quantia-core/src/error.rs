//! Error type shared by every Quantia crate
//!
//! Errors are values: the engine never panics on user input, it returns one
//! of these and lets the caller decide.

use serde::Serialize;
use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const FORMAT_ERROR: &str = "FORMAT_ERROR";
    pub const UNKNOWN_PREFIX: &str = "UNKNOWN_PREFIX";
    pub const DUPLICATE_SYMBOL: &str = "DUPLICATE_SYMBOL";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const RENDER_ERROR: &str = "RENDER_ERROR";
}

/// Error type for quantity operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantityError {
    /// Malformed input, unresolvable unit or prefix token, invalid currency prefix.
    #[error("Format error: {0}")]
    Format(String),

    #[error("Unknown prefix: '{0}'")]
    UnknownPrefix(String),

    /// A unit table tried to register the same bare symbol twice.
    #[error("Duplicate symbol: there is already a unit with the symbol '{0}'")]
    DuplicateSymbol(String),

    #[error("Incompatible units: '{left}' and '{right}'")]
    IncompatibleUnits { left: String, right: String },

    /// A formatter was asked for an empty rendering.
    #[error("Render error: {0}")]
    Render(String),
}

impl QuantityError {
    pub fn format(message: impl Into<String>) -> Self {
        QuantityError::Format(message.into())
    }

    pub fn incompatible(left: impl Into<String>, right: impl Into<String>) -> Self {
        QuantityError::IncompatibleUnits {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            QuantityError::Format(_) => codes::FORMAT_ERROR,
            QuantityError::UnknownPrefix(_) => codes::UNKNOWN_PREFIX,
            QuantityError::DuplicateSymbol(_) => codes::DUPLICATE_SYMBOL,
            QuantityError::IncompatibleUnits { .. } => codes::INCOMPATIBLE_UNITS,
            QuantityError::Render(_) => codes::RENDER_ERROR,
        }
    }

    /// Serializable snapshot of this error
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code(),
            message: self.to_string(),
        }
    }
}

/// Code plus human-readable message, for structured output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub code: &'static str,
    pub message: String,
}

pub type Result<T> = std::result::Result<T, QuantityError>;
