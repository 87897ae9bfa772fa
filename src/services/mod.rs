//! Application services.
//!
//! - `extractor`: free text to a validated [`IssueBatch`](crate::domain::models::IssueBatch)
//! - `submitter`: sequential per-issue filing into a tracker

pub mod extractor;
pub mod submitter;

pub use extractor::IssueExtractor;
pub use submitter::IssueSubmitter;
