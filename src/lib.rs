//! issueforge - turn free-text feedback reports into labeled GitHub issues
//!
//! A report goes through two steps:
//!
//! 1. **Extraction**: one schema-constrained model call turns the text into an
//!    [`IssueBatch`] of records with a title, a Markdown body, and labels from
//!    a closed set. Output that does not fit the schema is rejected whole.
//! 2. **Submission**: each record is filed with a single POST to the GitHub
//!    issues endpoint. Items fail independently and every outcome lands in a
//!    [`SubmissionReport`].
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): records, labels, outcomes, errors, and ports
//! - **Service Layer** (`services`): extraction and submission
//! - **Adapters** (`adapters`): model backends and the GitHub client
//! - **Infrastructure Layer** (`infrastructure`): configuration and logging
//! - **CLI Layer** (`cli`): command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use issueforge::adapters::{github::GitHubClient, llm::build_backend};
//! use issueforge::{AppConfig, Destination, IssueExtractor, IssueSubmitter};
//!
//! # async fn demo(config: AppConfig, report: &str) -> anyhow::Result<()> {
//! let extractor = IssueExtractor::new(build_backend(&config.llm)?);
//! let batch = extractor.extract(report).await?;
//!
//! let destination = Destination::new(Some("acme/widgets"), config.github.token.as_deref())?;
//! let submitter = IssueSubmitter::new(Arc::new(GitHubClient::new(&config.github)?));
//! let report = submitter.submit_batch(&destination, &batch).await;
//! println!("{} created, {} failed", report.succeeded(), report.failed());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{
    AppConfig, CreatedIssue, Destination, IssueBatch, IssueRecord, Label, SubmissionOutcome,
    SubmissionReport, SubmissionResult,
};
pub use domain::ports::{IssueTracker, StructuredLlm};
pub use domain::{DomainError, DomainResult};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{IssueExtractor, IssueSubmitter};
