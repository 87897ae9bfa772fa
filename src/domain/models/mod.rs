//! Domain models for issue extraction and submission.

pub mod config;
pub mod issue;
pub mod submission;

pub use config::{AppConfig, GitHubConfig, LlmConfig, LlmProvider, LoggingConfig};
pub use issue::{IssueBatch, IssueRecord, Label, ISSUE_BATCH_SCHEMA_NAME};
pub use submission::{
    CreatedIssue, Destination, SubmissionOutcome, SubmissionReport, SubmissionResult,
};
