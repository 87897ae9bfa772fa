//! Domain errors for the issueforge pipeline.

use thiserror::Error;

/// Domain-level errors that can occur while extracting or submitting issues.
///
/// Extraction errors (`BackendUnavailable`, `SchemaValidationError`) abort a
/// run. Submission errors (`NetworkError`, `SubmissionRejected`) are scoped to
/// a single issue and are folded into the submission report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The model backend could not be reached or answered with an error status.
    #[error("Model backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The model answered, but not with a conforming issue list.
    #[error("Model output failed schema validation: {0}")]
    SchemaValidationError(String),

    /// The tracker request failed before a complete response arrived.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// The tracker answered with anything other than 201.
    #[error("Submission rejected with status {status}: {body}")]
    SubmissionRejected {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Repository or credential is not configured.
    #[error("Missing destination: {0}")]
    MissingDestination(String),

    /// A value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submission_rejected_display() {
        let err = DomainError::SubmissionRejected {
            status: 422,
            body: r#"{"message":"Validation Failed"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"Submission rejected with status 422: {"message":"Validation Failed"}"#
        );
    }

    #[test]
    fn test_from_serde_error() {
        let serde_error = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err: DomainError = serde_error.into();
        assert!(matches!(err, DomainError::SerializationError(_)));
    }
}
