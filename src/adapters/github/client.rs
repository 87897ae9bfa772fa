//! GitHub HTTP client.
//!
//! Wraps the issue-creation endpoint of the GitHub REST API v3. One call is
//! one POST: no rate limiting, no retry. The credential travels with each
//! call inside the [`Destination`], so a single client can file into any
//! repository.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{CreatedIssue, Destination, GitHubConfig, IssueRecord};
use crate::domain::ports::IssueTracker;

use super::models::GitHubCreateIssueRequest;

/// Media type requested from the API.
const GITHUB_V3_ACCEPT: &str = "application/vnd.github.v3+json";

/// HTTP client for the GitHub REST API v3.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    /// The underlying HTTP client.
    http: Client,
    /// API base URL without a trailing slash.
    base_url: String,
}

impl GitHubClient {
    /// Create a client from the tracker configuration.
    pub fn new(config: &GitHubConfig) -> DomainResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                DomainError::NetworkError(format!("failed to build GitHub HTTP client: {e}"))
            })?;
        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue-creation endpoint for a repository.
    pub fn issues_url(&self, repo: &str) -> String {
        format!("{}/repos/{}/issues", self.base_url, repo)
    }
}

#[async_trait]
impl IssueTracker for GitHubClient {
    /// Create a new issue in the destination repository.
    ///
    /// Only `201 Created` counts as success; any other status comes back as
    /// `SubmissionRejected` carrying the raw body.
    #[instrument(skip_all, fields(repo = destination.repo(), title = issue.title()))]
    async fn create_issue(
        &self,
        destination: &Destination,
        issue: &IssueRecord,
    ) -> DomainResult<CreatedIssue> {
        let url = self.issues_url(destination.repo());
        let req_body = GitHubCreateIssueRequest::from(issue);

        debug!(url = %url, labels = ?req_body.labels, "POST create issue");

        let resp = self
            .http
            .post(&url)
            .header(AUTHORIZATION, format!("token {}", destination.token()))
            .header(ACCEPT, GITHUB_V3_ACCEPT)
            .json(&req_body)
            .send()
            .await
            .map_err(|e| {
                DomainError::NetworkError(format!("GitHub create_issue request failed: {e}"))
            })?;

        let status = resp.status();
        let body_text = match resp.text().await {
            Ok(text) => text,
            Err(e) => {
                warn!(status = %status, error = %e, "failed to read GitHub response body");
                if status != StatusCode::CREATED {
                    return Err(DomainError::SubmissionRejected {
                        status: status.as_u16(),
                        body: format!("<failed to read response body: {e}>"),
                    });
                }
                return Ok(echo_created(issue));
            }
        };

        if status != StatusCode::CREATED {
            return Err(DomainError::SubmissionRejected {
                status: status.as_u16(),
                body: body_text,
            });
        }

        let created = serde_json::from_str::<CreatedIssue>(&body_text).unwrap_or_else(|e| {
            warn!(error = %e, "GitHub create_issue returned 201 with an unparseable body");
            echo_created(issue)
        });
        Ok(created)
    }
}

/// Stand-in for a 201 whose body is unusable.
fn echo_created(issue: &IssueRecord) -> CreatedIssue {
    CreatedIssue {
        title: issue.title().to_string(),
        ..CreatedIssue::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new_trims_base_url() {
        let config = GitHubConfig {
            api_base_url: "https://github.example.com/api/v3/".to_string(),
            ..Default::default()
        };
        let client = GitHubClient::new(&config).unwrap();
        assert_eq!(
            client.issues_url("acme/widgets"),
            "https://github.example.com/api/v3/repos/acme/widgets/issues"
        );
    }

    #[test]
    fn test_default_issues_url() {
        let client = GitHubClient::new(&GitHubConfig::default()).unwrap();
        assert_eq!(
            client.issues_url("org/repo"),
            "https://api.github.com/repos/org/repo/issues"
        );
    }
}
