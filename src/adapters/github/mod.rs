//! GitHub Issues adapter.
//!
//! Implements the [`IssueTracker`](crate::domain::ports::IssueTracker) port
//! against the GitHub REST API v3 issue-creation endpoint.

pub mod client;
pub mod models;

pub use client::GitHubClient;
