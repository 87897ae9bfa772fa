//! Issue tracker port.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;
use crate::domain::models::{CreatedIssue, Destination, IssueRecord};

/// An external issue tracker that accepts one issue per call.
///
/// Implementations perform exactly one request per call and never retry.
/// A refused request is reported as `SubmissionRejected { status, body }`
/// with the body kept verbatim; a request that never got a response is a
/// `NetworkError`.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// File one issue in the destination repository.
    async fn create_issue(
        &self,
        destination: &Destination,
        issue: &IssueRecord,
    ) -> DomainResult<CreatedIssue>;
}
