//! Per-issue submission with failure isolation.
//!
//! Each record is filed with exactly one tracker call. A failed item is
//! recorded in the report and the next item proceeds; nothing is retried.

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use crate::domain::models::{
    Destination, IssueBatch, IssueRecord, SubmissionOutcome, SubmissionReport, SubmissionResult,
};
use crate::domain::ports::IssueTracker;

/// Files issue records into a tracker.
pub struct IssueSubmitter {
    tracker: Arc<dyn IssueTracker>,
}

impl IssueSubmitter {
    pub fn new(tracker: Arc<dyn IssueTracker>) -> Self {
        Self { tracker }
    }

    /// Submit one issue. Never fails; the outcome carries any error.
    #[instrument(skip_all, fields(repo = destination.repo(), title = issue.title()))]
    pub async fn submit(&self, destination: &Destination, issue: &IssueRecord) -> SubmissionResult {
        let attempt = self.tracker.create_issue(destination, issue).await;
        let result = SubmissionResult::from_attempt(issue.title(), attempt);

        match &result.outcome {
            SubmissionOutcome::Created { issue: created } => info!(
                number = created.number,
                url = %created.html_url,
                "Successfully created issue: '{}'",
                result.title
            ),
            SubmissionOutcome::Rejected { status_code, body } => warn!(
                status = status_code,
                response = %body,
                "Failed to create issue: '{}'",
                result.title
            ),
            SubmissionOutcome::NetworkFailure { error: message }
            | SubmissionOutcome::Failed { error: message } => error!(
                error = %message,
                "Failed to create issue: '{}'",
                result.title
            ),
        }

        result
    }

    /// Submit every record in batch order, one at a time.
    #[instrument(skip_all, fields(repo = destination.repo(), count = batch.len()))]
    pub async fn submit_batch(
        &self,
        destination: &Destination,
        batch: &IssueBatch,
    ) -> SubmissionReport {
        let mut report = SubmissionReport::new(destination.repo());
        for issue in batch {
            report = report.with_result(self.submit(destination, issue).await);
        }

        info!(
            succeeded = report.succeeded(),
            failed = report.failed(),
            "batch submission finished"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::{DomainError, DomainResult};
    use crate::domain::models::{CreatedIssue, Label};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Tracker that rejects or drops titles it is told to, and counts calls.
    #[derive(Default)]
    struct FakeTracker {
        failures: HashMap<String, DomainError>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeTracker {
        fn failing(title: &str, err: DomainError) -> Self {
            Self {
                failures: HashMap::from([(title.to_string(), err)]),
                ..Default::default()
            }
        }

        fn calls_for(&self, title: &str) -> usize {
            self.calls.lock().unwrap().iter().filter(|t| *t == title).count()
        }
    }

    #[async_trait]
    impl IssueTracker for FakeTracker {
        async fn create_issue(
            &self,
            _destination: &Destination,
            issue: &IssueRecord,
        ) -> DomainResult<CreatedIssue> {
            let mut calls = self.calls.lock().unwrap();
            calls.push(issue.title().to_string());
            if let Some(err) = self.failures.get(issue.title()) {
                return Err(err.clone());
            }
            Ok(CreatedIssue {
                number: calls.len() as u64,
                html_url: format!("https://github.com/acme/widgets/issues/{}", calls.len()),
                title: issue.title().to_string(),
            })
        }
    }

    fn destination() -> Destination {
        Destination::new(Some("acme/widgets"), Some("ghp_test")).unwrap()
    }

    fn record(title: &str) -> IssueRecord {
        IssueRecord::new(title, "body", vec![Label::Bug]).unwrap()
    }

    #[tokio::test]
    async fn test_submit_success_echoes_title() {
        let submitter = IssueSubmitter::new(Arc::new(FakeTracker::default()));
        let result = submitter.submit(&destination(), &record("Fix login")).await;
        assert!(result.is_success());
        assert_eq!(result.created().unwrap().title, "Fix login");
        assert_eq!(result.status_code(), Some(201));
    }

    #[tokio::test]
    async fn test_submit_rejection_is_captured() {
        let body = r#"{"message":"Validation Failed"}"#;
        let tracker = FakeTracker::failing(
            "Bad",
            DomainError::SubmissionRejected {
                status: 422,
                body: body.to_string(),
            },
        );
        let submitter = IssueSubmitter::new(Arc::new(tracker));
        let result = submitter.submit(&destination(), &record("Bad")).await;
        assert!(!result.is_success());
        assert_eq!(
            result.outcome,
            SubmissionOutcome::Rejected {
                status_code: 422,
                body: body.to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_network_failure_is_captured() {
        let tracker = FakeTracker::failing(
            "Offline",
            DomainError::NetworkError("connection reset".to_string()),
        );
        let submitter = IssueSubmitter::new(Arc::new(tracker));
        let result = submitter.submit(&destination(), &record("Offline")).await;
        assert_eq!(result.status_code(), None);
        assert!(matches!(
            result.outcome,
            SubmissionOutcome::NetworkFailure { ref error } if error.contains("connection reset")
        ));
    }

    #[tokio::test]
    async fn test_batch_isolates_failures() {
        let tracker = Arc::new(FakeTracker::failing(
            "second",
            DomainError::SubmissionRejected {
                status: 403,
                body: "forbidden".to_string(),
            },
        ));
        let submitter = IssueSubmitter::new(tracker.clone());
        let batch = IssueBatch::new(vec![record("first"), record("second"), record("third")]);

        let report = submitter.submit_batch(&destination(), &batch).await;

        assert_eq!(report.repo, "acme/widgets");
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.failed(), 1);
        let titles: Vec<_> = report.results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["first", "second", "third"]);
        assert!(!report.results[1].is_success());
        for title in ["first", "second", "third"] {
            assert_eq!(tracker.calls_for(title), 1);
        }
    }

    #[tokio::test]
    async fn test_empty_batch_makes_no_calls() {
        let tracker = Arc::new(FakeTracker::default());
        let submitter = IssueSubmitter::new(tracker.clone());
        let report = submitter
            .submit_batch(&destination(), &IssueBatch::default())
            .await;
        assert!(report.results.is_empty());
        assert!(report.all_succeeded());
        assert!(tracker.calls.lock().unwrap().is_empty());
    }
}
