//! Submission destination and per-item outcomes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// Where issues are filed: a repository on the tracker plus its credential.
///
/// Construction fails with [`DomainError::MissingDestination`] when either
/// half is absent, so a `Destination` in hand is always usable.
#[derive(Clone, PartialEq, Eq)]
pub struct Destination {
    repo: String,
    token: String,
}

impl Destination {
    /// Validate and build a destination from optional configuration values.
    pub fn new(repo: Option<&str>, token: Option<&str>) -> DomainResult<Self> {
        let repo = repo.map(str::trim).filter(|r| !r.is_empty()).ok_or_else(|| {
            DomainError::MissingDestination(
                "repository identifier is not set (GITHUB_REPO or github.repo)".to_string(),
            )
        })?;
        let token = token.map(str::trim).filter(|t| !t.is_empty()).ok_or_else(|| {
            DomainError::MissingDestination(
                "tracker credential is not set (GITHUB_TOKEN or github.token)".to_string(),
            )
        })?;
        Ok(Self {
            repo: repo.to_string(),
            token: token.to_string(),
        })
    }

    /// Repository identifier, e.g. `owner/name`.
    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Credential sent as `Authorization: token <credential>`.
    pub fn token(&self) -> &str {
        &self.token
    }
}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Destination")
            .field("repo", &self.repo)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

/// The tracker's description of a newly created issue.
///
/// Fields default when the tracker omits them; a 201 is a success whatever
/// the body looks like.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIssue {
    /// Sequential number within the repository.
    #[serde(default)]
    pub number: u64,
    /// URL to view the issue in the tracker UI.
    #[serde(default)]
    pub html_url: String,
    /// Title as stored by the tracker.
    #[serde(default)]
    pub title: String,
}

/// What happened to one issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// The tracker answered 201.
    Created {
        /// Parsed creation payload.
        issue: CreatedIssue,
    },
    /// The tracker answered with any other status.
    Rejected {
        /// HTTP status code.
        status_code: u16,
        /// Raw response body, verbatim.
        body: String,
    },
    /// No response was received.
    NetworkFailure {
        /// Transport error message.
        error: String,
    },
    /// The attempt failed for a reason other than transport or rejection.
    Failed {
        /// Error message, prefixed with its kind.
        error: String,
    },
}

/// Per-item result of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionResult {
    /// Title of the submitted issue.
    pub title: String,
    /// Outcome of the single POST.
    #[serde(flatten)]
    pub outcome: SubmissionOutcome,
}

impl SubmissionResult {
    /// Fold a tracker call result into a reportable outcome.
    pub fn from_attempt(title: impl Into<String>, attempt: DomainResult<CreatedIssue>) -> Self {
        let outcome = match attempt {
            Ok(issue) => SubmissionOutcome::Created { issue },
            Err(DomainError::SubmissionRejected { status, body }) => SubmissionOutcome::Rejected {
                status_code: status,
                body,
            },
            Err(DomainError::NetworkError(error)) => SubmissionOutcome::NetworkFailure { error },
            Err(other) => SubmissionOutcome::Failed {
                error: other.to_string(),
            },
        };
        Self {
            title: title.into(),
            outcome,
        }
    }

    pub const fn is_success(&self) -> bool {
        matches!(self.outcome, SubmissionOutcome::Created { .. })
    }

    /// HTTP status received, if a response arrived at all.
    pub fn status_code(&self) -> Option<u16> {
        match self.outcome {
            SubmissionOutcome::Created { .. } => Some(201),
            SubmissionOutcome::Rejected { status_code, .. } => Some(status_code),
            SubmissionOutcome::NetworkFailure { .. } | SubmissionOutcome::Failed { .. } => None,
        }
    }

    /// Created-issue payload on success.
    pub fn created(&self) -> Option<&CreatedIssue> {
        match &self.outcome {
            SubmissionOutcome::Created { issue } => Some(issue),
            _ => None,
        }
    }
}

/// Ordered results of submitting a batch, one entry per issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReport {
    /// Repository the batch was filed against.
    pub repo: String,
    /// One result per issue, in batch order.
    pub results: Vec<SubmissionResult>,
}

impl SubmissionReport {
    pub fn new(repo: impl Into<String>) -> Self {
        Self {
            repo: repo.into(),
            results: Vec::new(),
        }
    }

    /// Append one result, consuming and returning the report.
    #[must_use]
    pub fn with_result(mut self, result: SubmissionResult) -> Self {
        self.results.push(result);
        self
    }

    pub fn succeeded(&self) -> usize {
        self.results.iter().filter(|r| r.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.results.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_requires_repo() {
        let err = Destination::new(None, Some("ghp_abc")).unwrap_err();
        assert!(matches!(err, DomainError::MissingDestination(_)));
        let err = Destination::new(Some("  "), Some("ghp_abc")).unwrap_err();
        assert!(err.to_string().contains("repository"));
    }

    #[test]
    fn test_destination_requires_token() {
        let err = Destination::new(Some("acme/widgets"), Some("")).unwrap_err();
        assert!(err.to_string().contains("credential"));
    }

    #[test]
    fn test_destination_debug_redacts_token() {
        let dest = Destination::new(Some("acme/widgets"), Some("ghp_secret")).unwrap();
        let debug = format!("{dest:?}");
        assert!(debug.contains("acme/widgets"));
        assert!(!debug.contains("ghp_secret"));
        assert_eq!(dest.token(), "ghp_secret");
    }

    #[test]
    fn test_result_from_rejection_keeps_body_verbatim() {
        let result = SubmissionResult::from_attempt(
            "Broken link",
            Err(DomainError::SubmissionRejected {
                status: 422,
                body: r#"{"message":"Validation Failed"}"#.to_string(),
            }),
        );
        assert!(!result.is_success());
        assert_eq!(result.status_code(), Some(422));
        assert_eq!(
            result.outcome,
            SubmissionOutcome::Rejected {
                status_code: 422,
                body: r#"{"message":"Validation Failed"}"#.to_string(),
            }
        );
    }

    #[test]
    fn test_result_from_network_error() {
        let result = SubmissionResult::from_attempt(
            "Anything",
            Err(DomainError::NetworkError("connection refused".to_string())),
        );
        assert!(!result.is_success());
        assert_eq!(result.status_code(), None);
        assert_eq!(
            result.outcome,
            SubmissionOutcome::NetworkFailure {
                error: "connection refused".to_string()
            }
        );
    }

    #[test]
    fn test_result_keeps_other_error_kinds() {
        let result = SubmissionResult::from_attempt(
            "Anything",
            Err(DomainError::SerializationError("bad payload".to_string())),
        );
        assert!(!result.is_success());
        assert_eq!(result.status_code(), None);
        assert_eq!(
            result.outcome,
            SubmissionOutcome::Failed {
                error: "Serialization error: bad payload".to_string()
            }
        );

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["status"], "failed");
    }

    #[test]
    fn test_report_counts() {
        let created = CreatedIssue {
            number: 1,
            html_url: "https://github.com/acme/widgets/issues/1".to_string(),
            title: "A".to_string(),
        };
        let report = SubmissionReport::new("acme/widgets")
            .with_result(SubmissionResult::from_attempt("A", Ok(created.clone())))
            .with_result(SubmissionResult::from_attempt(
                "B",
                Err(DomainError::SubmissionRejected {
                    status: 403,
                    body: "nope".to_string(),
                }),
            ))
            .with_result(SubmissionResult::from_attempt("C", Ok(created)));
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_succeeded());
    }

    #[test]
    fn test_result_json_shape() {
        let result = SubmissionResult::from_attempt(
            "T",
            Err(DomainError::SubmissionRejected {
                status: 404,
                body: "Not Found".to_string(),
            }),
        );
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["title"], "T");
        assert_eq!(value["status"], "rejected");
        assert_eq!(value["status_code"], 404);
        assert_eq!(value["body"], "Not Found");
    }
}
