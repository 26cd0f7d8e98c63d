//! Error handling for Lavafilters
//!
//! All operations on filter state are total; the only runtime failures are a
//! caller supplying a field name a filter does not recognize, or JSON
//! (de)serialization failing at the wire boundary.

use thiserror::Error;

/// Result type alias for Lavafilters operations
pub type Result<T> = std::result::Result<T, FilterError>;

/// Main error type for Lavafilters operations
#[derive(Error, Debug)]
pub enum FilterError {
    /// A string-keyed update named a field the filter does not have.
    ///
    /// Unknown fields are rejected rather than ignored so a misconfigured
    /// effect chain fails loudly at the boundary instead of silently losing
    /// audio state.
    #[error("Unknown field '{field}' for filter '{filter}'")]
    UnknownField { filter: &'static str, field: String },

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FilterError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            FilterError::UnknownField { .. } => "UNKNOWN_FIELD",
            FilterError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = FilterError::UnknownField {
            filter: "karaoke",
            field: "loudness".to_string(),
        };
        assert_eq!(err.error_code(), "UNKNOWN_FIELD");
    }

    #[test]
    fn test_unknown_field_message() {
        let err = FilterError::UnknownField {
            filter: "timescale",
            field: "tempo".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown field 'tempo' for filter 'timescale'");
    }
}
