//! Issue records extracted from free-text feedback.
//!
//! These types double as the structured-output contract handed to the model
//! backend: the JSON Schema is derived from them with `schemars`, and model
//! responses are accepted only if they deserialize back into them. Field doc
//! comments become schema descriptions, so they are written for the model.

use std::fmt;

use schemars::gen::SchemaSettings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::errors::{DomainError, DomainResult};

/// Name under which the batch schema is presented to the model.
pub const ISSUE_BATCH_SCHEMA_NAME: &str = "IssueList";

/// A label that may be attached to an issue.
///
/// The set is closed: anything else coming back from the model is a schema
/// violation, not a label to drop or fuzzy-match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum Label {
    #[serde(rename = "bug")]
    Bug,
    #[serde(rename = "enhancement")]
    Enhancement,
    #[serde(rename = "student-login")]
    StudentLogin,
    #[serde(rename = "teacher-login")]
    TeacherLogin,
    #[serde(rename = "mentor-login")]
    MentorLogin,
    #[serde(rename = "official-login")]
    OfficialLogin,
    #[serde(rename = "ui/ux")]
    UiUx,
    #[serde(rename = "documentation")]
    Documentation,
}

impl Label {
    /// Every allowed label, in display order.
    pub const ALL: [Self; 8] = [
        Self::Bug,
        Self::Enhancement,
        Self::StudentLogin,
        Self::TeacherLogin,
        Self::MentorLogin,
        Self::OfficialLogin,
        Self::UiUx,
        Self::Documentation,
    ];

    /// The label as it appears on the tracker.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bug => "bug",
            Self::Enhancement => "enhancement",
            Self::StudentLogin => "student-login",
            Self::TeacherLogin => "teacher-login",
            Self::MentorLogin => "mentor-login",
            Self::OfficialLogin => "official-login",
            Self::UiUx => "ui/ux",
            Self::Documentation => "documentation",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a single, actionable GitHub issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct IssueRecord {
    /// A concise, descriptive title for the issue.
    title: String,
    /// A detailed description of the task using Markdown. Include context from the report and suggest what needs to be done.
    body: String,
    /// A list of relevant labels for the issue.
    labels: Vec<Label>,
}

impl IssueRecord {
    /// Build a record, rejecting an empty or whitespace-only title.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        labels: Vec<Label>,
    ) -> DomainResult<Self> {
        let record = Self {
            title: title.into(),
            body: body.into(),
            labels,
        };
        record.validate()?;
        Ok(record)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Label names in tracker form, order preserved.
    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|l| l.as_str().to_string()).collect()
    }

    fn validate(&self) -> DomainResult<()> {
        if self.title.trim().is_empty() {
            return Err(DomainError::SchemaValidationError(
                "issue title must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// A list of GitHub issues to be created from the provided text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct IssueBatch {
    /// The issues, in the order they should be filed.
    issues: Vec<IssueRecord>,
}

impl IssueBatch {
    /// Build a batch from already-validated records.
    pub const fn new(issues: Vec<IssueRecord>) -> Self {
        Self { issues }
    }

    pub fn issues(&self) -> &[IssueRecord] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IssueRecord> {
        self.issues.iter()
    }

    /// Accept a structured model response, or reject it outright.
    ///
    /// There is no partial path: one bad record fails the whole batch.
    pub fn from_model_output(value: serde_json::Value) -> DomainResult<Self> {
        let batch: Self = serde_json::from_value(value)
            .map_err(|e| DomainError::SchemaValidationError(e.to_string()))?;
        batch.validate()?;
        Ok(batch)
    }

    /// Parse a batch from JSON text (e.g. a batch saved by `extract --output`).
    pub fn from_json_str(json: &str) -> DomainResult<Self> {
        let batch: Self = serde_json::from_str(json)
            .map_err(|e| DomainError::SchemaValidationError(e.to_string()))?;
        batch.validate()?;
        Ok(batch)
    }

    fn validate(&self) -> DomainResult<()> {
        for (index, issue) in self.issues.iter().enumerate() {
            issue.validate().map_err(|_| {
                DomainError::SchemaValidationError(format!(
                    "issue {} has an empty title",
                    index + 1
                ))
            })?;
        }
        Ok(())
    }

    /// JSON Schema describing the batch, with all subschemas inlined.
    pub fn json_schema() -> DomainResult<serde_json::Value> {
        let settings = SchemaSettings::draft07().with(|s| {
            s.inline_subschemas = true;
            s.meta_schema = None;
        });
        let schema = settings
            .into_generator()
            .into_root_schema_for::<Self>();
        let mut value = serde_json::to_value(schema)?;
        if let Some(obj) = value.as_object_mut() {
            obj.remove("title");
            obj.remove("definitions");
        }
        Ok(value)
    }
}

impl<'a> IntoIterator for &'a IssueBatch {
    type Item = &'a IssueRecord;
    type IntoIter = std::slice::Iter<'a, IssueRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.issues.iter()
    }
}
