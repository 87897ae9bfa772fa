//! Domain layer for issueforge
//!
//! Issue records, the closed label set, submission outcomes, and the port
//! traits the model backend and the issue tracker are reached through.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{DomainError, DomainResult};
