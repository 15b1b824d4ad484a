//! Error types for Agora core operations.
//!
//! The core favors total functions with documented degenerate outputs;
//! the one error class raised here is an invalid precondition supplied by
//! the caller.

use std::error::Error;
use std::fmt;

/// Result type for Agora core operations.
pub type Result<T> = std::result::Result<T, AgoraError>;

/// Errors that can occur during Agora core operations.
#[derive(Debug, Clone, PartialEq)]
pub enum AgoraError {
    /// A caller-supplied parameter violates a precondition.
    InvalidParameter {
        field: String,
        value: String,
        reason: String,
    },
    /// A caller-supplied parameter is outside its allowed range.
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

impl fmt::Display for AgoraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgoraError::InvalidParameter {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid value for {}: {} ({})", field, value, reason)
            }
            AgoraError::OutOfRange {
                field,
                min,
                max,
                value,
            } => {
                write!(
                    f,
                    "{} out of range: {} (must be {}-{})",
                    field, value, min, max
                )
            }
        }
    }
}

impl Error for AgoraError {}

// Convenience constructors
impl AgoraError {
    pub fn invalid_parameter(
        field: impl Into<String>,
        value: impl fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        AgoraError::InvalidParameter {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn out_of_range(field: impl Into<String>, min: f64, max: f64, value: f64) -> Self {
        AgoraError::OutOfRange {
            field: field.into(),
            min,
            max,
            value,
        }
    }
}
