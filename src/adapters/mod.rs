//! Adapters implementing the domain ports.
//!
//! - `github`: [`IssueTracker`](crate::domain::ports::IssueTracker) over the GitHub REST API
//! - `llm`: [`StructuredLlm`](crate::domain::ports::StructuredLlm) backends

pub mod github;
pub mod llm;
