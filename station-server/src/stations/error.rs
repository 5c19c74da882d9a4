//! Station catalog error types.

use crate::domain::StationCode;

/// Errors that can occur while loading the station reference set.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Catalog file could not be read
    #[error("failed to read station catalog: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog document is not valid JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A record carries a malformed code
    #[error("invalid code {code:?}: {reason}")]
    InvalidCode { code: String, reason: String },

    /// A record has a blank name or display label
    #[error("station {code} has an empty name or label")]
    EmptyLabel { code: StationCode },

    /// Two records share a code
    #[error("duplicate station code: {0}")]
    DuplicateCode(StationCode),

    /// The catalog contains no stations
    #[error("station catalog is empty")]
    Empty,
}
