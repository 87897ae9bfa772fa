//! Anthropic Messages API backend.
//!
//! The schema is offered as the input schema of a single tool and the
//! request forces that tool with `tool_choice`. The `tool_use` block's
//! `input` is the structured payload.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::LlmConfig;
use crate::domain::ports::{StructuredLlm, StructuredRequest};

use super::anthropic_types::{
    ContentBlock, Message, MessageRequest, MessageResponse, Tool, ToolChoice,
};
use super::{build_http_client, resolve_api_key};

/// API version header value.
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Backend for the Anthropic Messages API.
pub struct AnthropicBackend {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl AnthropicBackend {
    /// Build from configuration; fails when no API key can be found.
    pub fn new(config: &LlmConfig) -> DomainResult<Self> {
        Ok(Self {
            http: build_http_client(config.timeout_secs)?,
            api_key: resolve_api_key(config)?,
            base_url: config.effective_base_url().to_string(),
            model: config.effective_model().to_string(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn build_request(&self, request: &StructuredRequest) -> MessageRequest {
        MessageRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: request.user.clone(),
            }],
            max_tokens: self.max_tokens,
            system: Some(request.system.clone()),
            temperature: Some(self.temperature),
            tools: Some(vec![Tool {
                name: request.schema_name.clone(),
                description: request.schema_description.clone(),
                input_schema: request.schema.clone(),
            }]),
            tool_choice: Some(ToolChoice::Tool {
                name: request.schema_name.clone(),
            }),
        }
    }
}

/// Classify an error status the way the Messages API documents them.
fn describe_status(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "invalid request",
        401 | 403 => "authentication failed",
        404 => "not found",
        429 => "rate limit exceeded",
        529 => "overloaded",
        s if (500..600).contains(&s) => "server error",
        _ => "unexpected status",
    }
}

fn extract_tool_input(
    response: MessageResponse,
    schema_name: &str,
) -> DomainResult<serde_json::Value> {
    let stop_reason = response.stop_reason;
    response
        .content
        .into_iter()
        .find_map(|block| match block {
            ContentBlock::ToolUse { name, input, .. } if name == schema_name => Some(input),
            _ => None,
        })
        .ok_or_else(|| {
            DomainError::SchemaValidationError(format!(
                "model did not call '{schema_name}' (stop_reason: {stop_reason:?})"
            ))
        })
}

#[async_trait]
impl StructuredLlm for AnthropicBackend {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip_all, fields(model = %self.model))]
    async fn generate_structured(
        &self,
        request: StructuredRequest,
    ) -> DomainResult<serde_json::Value> {
        let url = format!("{}/v1/messages", self.base_url);
        let body = self.build_request(&request);

        debug!(url = %url, "POST messages");

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                DomainError::BackendUnavailable(format!("Anthropic request failed: {e}"))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            DomainError::BackendUnavailable(format!("failed to read Anthropic response: {e}"))
        })?;

        if !status.is_success() {
            warn!(status = %status, "Anthropic API returned an error status");
            return Err(DomainError::BackendUnavailable(format!(
                "Anthropic API returned {status} ({}): {text}",
                describe_status(status)
            )));
        }

        let message: MessageResponse = serde_json::from_str(&text).map_err(|e| {
            DomainError::SchemaValidationError(format!("unexpected Messages API envelope: {e}"))
        })?;

        info!(
            input_tokens = message.usage.input_tokens,
            output_tokens = message.usage.output_tokens,
            "Anthropic message request succeeded"
        );

        extract_tool_input(message, &request.schema_name)
    }
}
