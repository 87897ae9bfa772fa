//! GitHub Issues API request models.
//!
//! These structs map to the GitHub REST API v3 JSON payloads. They are used
//! internally by the GitHub adapter and are not part of the public domain
//! model; the response side is [`CreatedIssue`](crate::domain::models::CreatedIssue).

use serde::{Deserialize, Serialize};

use crate::domain::models::IssueRecord;

/// Request body for creating a new GitHub issue.
///
/// All three fields are always sent, including an empty `labels` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubCreateIssueRequest {
    /// Issue title.
    pub title: String,
    /// Issue body text (Markdown).
    pub body: String,
    /// Labels to apply to the new issue.
    pub labels: Vec<String>,
}

impl From<&IssueRecord> for GitHubCreateIssueRequest {
    fn from(issue: &IssueRecord) -> Self {
        Self {
            title: issue.title().to_string(),
            body: issue.body().to_string(),
            labels: issue.label_names(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{CreatedIssue, Label};

    #[test]
    fn test_create_issue_request_from_record() {
        let record = IssueRecord::new(
            "Save Changes button is disabled",
            "The **Save Changes** button on the profile page stays greyed out.",
            vec![Label::Bug, Label::UiUx],
        )
        .unwrap();
        let req = GitHubCreateIssueRequest::from(&record);
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["title"], "Save Changes button is disabled");
        assert_eq!(json["labels"], serde_json::json!(["bug", "ui/ux"]));
        assert!(json["body"].as_str().unwrap().contains("greyed out"));
    }

    #[test]
    fn test_create_issue_request_sends_empty_labels() {
        let record = IssueRecord::new("Minimal", "", vec![]).unwrap();
        let json = serde_json::to_string(&GitHubCreateIssueRequest::from(&record)).unwrap();
        assert!(json.contains("\"labels\":[]"));
        assert!(json.contains("\"body\":\"\""));
    }

    #[test]
    fn test_created_issue_deserialization() {
        let json = r#"{
            "id": 1,
            "number": 7,
            "title": "Fix login bug",
            "state": "open",
            "html_url": "https://github.com/org/repo/issues/7",
            "labels": [{ "name": "bug", "color": "d73a4a" }]
        }"#;
        let created: CreatedIssue = serde_json::from_str(json).unwrap();
        assert_eq!(created.number, 7);
        assert_eq!(created.title, "Fix login bug");
        assert_eq!(created.html_url, "https://github.com/org/repo/issues/7");
    }

    #[test]
    fn test_created_issue_tolerates_sparse_body() {
        let created: CreatedIssue = serde_json::from_str("{}").unwrap();
        assert_eq!(created, CreatedIssue::default());
    }
}
