//! Error types for burst detection.
//!
//! Structured error handling with:
//! - Stable error codes for machine parsing (doubling as CLI exit codes)
//! - Category classification for error grouping
//! - The offending value attached so callers can correct their input
//!
//! Every failure is a permanent input or configuration defect: decoding is a
//! deterministic pure function over validated input, so nothing here is
//! retryable and there is no partial-result mode.
//!
//! # Agent-Facing Output
//!
//! Errors serialize to structured JSON:
//! ```json
//! {
//!   "code": 10,
//!   "category": "config",
//!   "message": "invalid configuration: scale = 1 (must be greater than 1)"
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for burst detection operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error categories for grouping related errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// Decoder parameter errors (scale, penalty, rate schedule).
    Config,
    /// Malformed timestamp input.
    Input,
    /// File I/O errors (CLI layer only).
    Io,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorCategory::Config => write!(f, "config"),
            ErrorCategory::Input => write!(f, "input"),
            ErrorCategory::Io => write!(f, "io"),
        }
    }
}

/// Unified error type for burst detection.
#[derive(Error, Debug)]
pub enum Error {
    /// A decoder parameter is outside its valid domain. Raised before any
    /// decoding table is built.
    #[error("invalid configuration: {parameter} = {value} ({reason})")]
    InvalidConfiguration {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The timestamp sequence cannot be decoded. `index` points at the
    /// offending record position.
    #[error("malformed input at index {index}: {detail}")]
    MalformedInput { index: usize, detail: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the stable error code for this error.
    ///
    /// Codes double as CLI exit codes: 10 config, 11 input, 12 I/O.
    pub fn code(&self) -> i32 {
        match self {
            Error::InvalidConfiguration { .. } => 10,
            Error::MalformedInput { .. } => 11,
            Error::Io(_) => 12,
        }
    }

    /// Returns the error category for grouping and filtering.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::InvalidConfiguration { .. } => ErrorCategory::Config,
            Error::MalformedInput { .. } => ErrorCategory::Input,
            Error::Io(_) => ErrorCategory::Io,
        }
    }

    /// Structured JSON form for agent-facing output.
    pub fn to_structured(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code(),
            "category": self.category(),
            "message": self.to_string(),
        })
    }
}
