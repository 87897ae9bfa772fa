//! Port trait definitions (Hexagonal Architecture)
//!
//! - StructuredLlm: one schema-constrained model call
//! - IssueTracker: one issue-creation call against a tracker

pub mod issue_tracker;
pub mod llm_backend;

pub use issue_tracker::IssueTracker;
pub use llm_backend::{StructuredLlm, StructuredRequest};
