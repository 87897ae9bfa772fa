//! Extraction of issue records from free-text reports.
//!
//! One model call per extraction, constrained to the [`IssueBatch`] schema.
//! Whatever comes back is either a valid batch or an error; there is no
//! partial result.

use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::domain::errors::DomainResult;
use crate::domain::models::{IssueBatch, Label, ISSUE_BATCH_SCHEMA_NAME};
use crate::domain::ports::{StructuredLlm, StructuredRequest};

/// Instruction sent as the system message of every extraction.
pub const SYSTEM_PROMPT: &str = "\
You are an expert project manager. Read the following problem description or \
feedback report and break it down into a series of distinct, actionable issues.

For each issue, write a concise title, a detailed body in Markdown, and assign \
relevant labels. Labels must be chosen only from the provided list.
Create one issue for each numbered point in the report under each user login \
section. Aggregate related points into a single issue when that makes sense.
The issue body should give a developer enough context to understand the problem \
and the required changes.";

/// Description attached to the schema handed to the backend.
const SCHEMA_DESCRIPTION: &str = "A list of issues extracted from a problem description or feedback report.";

/// Turns unstructured text into a validated [`IssueBatch`].
pub struct IssueExtractor {
    llm: Arc<dyn StructuredLlm>,
}

impl IssueExtractor {
    pub fn new(llm: Arc<dyn StructuredLlm>) -> Self {
        Self { llm }
    }

    /// Build the backend request for one report.
    pub fn build_request(problem_description: &str) -> DomainResult<StructuredRequest> {
        let labels = Label::ALL.map(Label::as_str).join(", ");
        Ok(StructuredRequest {
            system: format!("{SYSTEM_PROMPT}\n\nAllowed labels: {labels}."),
            user: problem_description.to_string(),
            schema_name: ISSUE_BATCH_SCHEMA_NAME.to_string(),
            schema_description: SCHEMA_DESCRIPTION.to_string(),
            schema: IssueBatch::json_schema()?,
        })
    }

    /// Extract issues from a report.
    ///
    /// Blank input yields an empty batch without calling the backend.
    ///
    /// # Errors
    /// - `BackendUnavailable` if the backend cannot be reached or refuses the call
    /// - `SchemaValidationError` if the output does not fit the batch schema
    #[instrument(skip_all, fields(backend = self.llm.name(), model = self.llm.model(), input_len = problem_description.len()))]
    pub async fn extract(&self, problem_description: &str) -> DomainResult<IssueBatch> {
        if problem_description.trim().is_empty() {
            debug!("input is blank, skipping model call");
            return Ok(IssueBatch::default());
        }

        let request = Self::build_request(problem_description)?;

        info!("Calling {} to generate issues", self.llm.name());
        let output = self.llm.generate_structured(request).await?;
        let batch = IssueBatch::from_model_output(output)?;

        info!(count = batch.len(), "generated {} issues", batch.len());
        Ok(batch)
    }
}
