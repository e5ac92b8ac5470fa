//! # Error and Warning Types
//!
//! Structured error types for wind_core. Only one condition is fatal: missing
//! or non-positive building geometry (or an exposure category that cannot be
//! parsed). Everything else degrades to a [`CalcWarning`] carried inside a
//! valid result so callers never lose the computed pressures.
//!
//! ## Example
//!
//! ```rust
//! use wind_core::errors::{CalcError, CalcResult};
//!
//! fn validate_height(height_ft: f64) -> CalcResult<()> {
//!     if height_ft <= 0.0 {
//!         return Err(CalcError::invalid_geometry(
//!             "height_ft",
//!             height_ft.to_string(),
//!             "Height must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for wind_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Building geometry is missing, non-positive, or the exposure category
    /// is unrecognized. Computation aborts.
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// File I/O error (orchestration layer only)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
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

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::serialization(err.to_string())
    }
}

/// Category of a non-fatal condition recorded in a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WarningKind {
    /// Opening inventory missing or ambiguous; enclosure defaulted
    LowConfidenceClassification,
    /// Height or plan dimensions outside the simplified low-rise procedure
    SimplifiedMethodExceeded,
    /// Effective wind area outside the tabulated range; GCp clamped
    CoefficientOutOfRange,
    /// A non-geometry input was unusable and was replaced or ignored
    InputAdjusted,
    /// Unrated windward glazing in a windborne debris region may breach
    FailureScenario,
}

impl WarningKind {
    /// Short code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            WarningKind::LowConfidenceClassification => "LOW_CONFIDENCE_CLASSIFICATION",
            WarningKind::SimplifiedMethodExceeded => "SIMPLIFIED_METHOD_EXCEEDED",
            WarningKind::CoefficientOutOfRange => "COEFFICIENT_OUT_OF_RANGE",
            WarningKind::InputAdjusted => "INPUT_ADJUSTED",
            WarningKind::FailureScenario => "FAILURE_SCENARIO",
        }
    }
}

/// A non-fatal condition attached to a calculation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalcWarning {
    pub kind: WarningKind,
    pub message: String,
}

impl CalcWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        CalcWarning {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CalcWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.kind.code(), self.message)
    }
}

/// Validate a required building dimension (positive and finite).
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_geometry(
            field,
            value.to_string(),
            "Dimension must be a finite number",
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_geometry(
            field,
            value.to_string(),
            "Dimension must be positive",
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_geometry("length_ft", "-5", "Dimension must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("InvalidGeometry"));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            CalcError::invalid_geometry("h", "0", "x").error_code(),
            "INVALID_GEOMETRY"
        );
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("width_ft", 12.5).unwrap(), 12.5);
        assert!(require_positive("width_ft", 0.0).is_err());
        assert!(require_positive("width_ft", -1.0).is_err());
        assert!(require_positive("width_ft", f64::NAN).is_err());
        assert!(require_positive("width_ft", f64::INFINITY).is_err());
    }

    #[test]
    fn test_warning_display() {
        let w = CalcWarning::new(WarningKind::CoefficientOutOfRange, "area clamped");
        assert_eq!(w.to_string(), "[COEFFICIENT_OUT_OF_RANGE] area clamped");
    }
}
