//! # Error Types
//!
//! Structured error types for mep_core. Errors carry enough context to be
//! handled programmatically or surfaced directly as a validation message in
//! a form-based front end.
//!
//! ## Example
//!
//! ```rust
//! use mep_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(route_length_m: f64) -> CalcResult<()> {
//!     if route_length_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "route_length_m".to_string(),
//!             value: route_length_m.to_string(),
//!             reason: "Route length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Degenerate arithmetic (division by zero, log of zero, tangent at 90°) is
//! deliberately NOT an error: evaluators resolve those cases to explicit
//! sentinel values so the result record stays well-formed and displayable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mep_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong. Validation
/// errors are raised before any computation, so a failed calculation never
/// produces partial results.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A categorical lookup key has no entry in a reference table
    #[error("Unknown key '{key}' in table '{table}'")]
    UnknownKey { table: String, key: String },

    /// Calculation failed (input outside tabulated range, no feasible result)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// File is locked by another user/process
    #[error("File locked: '{path}' is locked by {locked_by} since {locked_at}")]
    FileLocked {
        path: String,
        locked_by: String,
        locked_at: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownKey error
    pub fn unknown_key(table: impl Into<String>, key: impl Into<String>) -> Self {
        CalcError::UnknownKey {
            table: table.into(),
            key: key.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(
        path: impl Into<String>,
        locked_by: impl Into<String>,
        locked_at: impl Into<String>,
    ) -> Self {
        CalcError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
            locked_at: locked_at.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownKey { .. } => "UNKNOWN_KEY",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::FileLocked { .. } => "FILE_LOCKED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("route_length_m", "-25.0", "Length must be positive");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("test").error_code(), "MISSING_FIELD");
        assert_eq!(
            CalcError::unknown_key("absorption", "velvet").error_code(),
            "UNKNOWN_KEY"
        );
    }

    #[test]
    fn test_unknown_key_display() {
        let err = CalcError::unknown_key("speaker_presets", "ACME-900");
        assert_eq!(
            err.to_string(),
            "Unknown key 'ACME-900' in table 'speaker_presets'"
        );
    }
}
