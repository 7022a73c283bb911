//! Result and error types for Formprobe.

use thiserror::Error;

/// Result type for Formprobe operations
pub type ProbeResult<T> = Result<T, ProbeError>;

/// Errors that can occur in Formprobe
#[derive(Debug, Error)]
pub enum ProbeError {
    /// A fill attempt reported more filled fields than it attempted
    #[error("Fill attempt for '{form_id}' reports {filled} filled out of {total} attempted")]
    FilledExceedsTotal {
        /// Fields reported as filled
        filled: u64,
        /// Fields attempted
        total: u64,
        /// Form the attempt belongs to
        form_id: String,
    },

    /// A field source could not produce descriptors
    #[error("Invalid field source: {message}")]
    InvalidFieldSource {
        /// Error message
        message: String,
    },

    /// A form document references something it does not contain
    #[error("Invalid form document: {message}")]
    InvalidDocument {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProbeError {
    /// Create an invalid field source error
    #[must_use]
    pub fn invalid_field_source(message: impl Into<String>) -> Self {
        Self::InvalidFieldSource {
            message: message.into(),
        }
    }

    /// Create an invalid document error
    #[must_use]
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_exceeds_total_display() {
        let err = ProbeError::FilledExceedsTotal {
            filled: 6,
            total: 5,
            form_id: "signup".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Fill attempt for 'signup' reports 6 filled out of 5 attempted"
        );
    }

    #[test]
    fn test_constructors() {
        let err = ProbeError::invalid_field_source("empty fixture");
        assert!(err.to_string().contains("empty fixture"));

        let err = ProbeError::invalid_document("no node 7");
        assert!(err.to_string().starts_with("Invalid form document"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ProbeError = json_err.into();
        assert!(matches!(err, ProbeError::Json(_)));
    }
}
