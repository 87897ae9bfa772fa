//! OpenAI-compatible chat completions backend (Groq, OpenAI).
//!
//! Structured output is obtained by declaring the schema as the parameters
//! of a single function tool and forcing the model to call it. The call's
//! `arguments` string is the structured payload.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{LlmConfig, LlmProvider};
use crate::domain::ports::{StructuredLlm, StructuredRequest};

use super::{build_http_client, resolve_api_key};

/// Backend speaking the `/chat/completions` dialect.
pub struct OpenAiCompatibleBackend {
    provider: LlmProvider,
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiCompatibleBackend {
    /// Build from configuration; fails when no API key can be found.
    pub fn new(config: &LlmConfig) -> DomainResult<Self> {
        Ok(Self {
            provider: config.provider,
            http: build_http_client(config.timeout_secs)?,
            api_key: resolve_api_key(config)?,
            base_url: config.effective_base_url().to_string(),
            model: config.effective_model().to_string(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn build_request(&self, request: &StructuredRequest) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: request.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.user.clone(),
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            tools: vec![ToolDefinition {
                tool_type: "function".to_string(),
                function: FunctionDefinition {
                    name: request.schema_name.clone(),
                    description: request.schema_description.clone(),
                    parameters: request.schema.clone(),
                },
            }],
            tool_choice: ToolChoice {
                choice_type: "function".to_string(),
                function: FunctionName {
                    name: request.schema_name.clone(),
                },
            },
        }
    }
}

/// Pull the structured payload out of a completion.
fn extract_tool_arguments(
    response: ChatCompletionResponse,
    schema_name: &str,
) -> DomainResult<serde_json::Value> {
    let choice = response.choices.into_iter().next().ok_or_else(|| {
        DomainError::SchemaValidationError("completion contained no choices".to_string())
    })?;

    let call = choice
        .message
        .tool_calls
        .unwrap_or_default()
        .into_iter()
        .find(|c| c.function.name == schema_name)
        .ok_or_else(|| {
            DomainError::SchemaValidationError(format!(
                "model did not call '{schema_name}' (finish_reason: {})",
                choice.finish_reason.as_deref().unwrap_or("unknown")
            ))
        })?;

    serde_json::from_str(&call.function.arguments).map_err(|e| {
        DomainError::SchemaValidationError(format!("tool arguments are not valid JSON: {e}"))
    })
}

#[async_trait]
impl StructuredLlm for OpenAiCompatibleBackend {
    fn name(&self) -> &'static str {
        self.provider.as_str()
    }

    fn model(&self) -> &str {
        &self.model
    }

    #[instrument(skip_all, fields(provider = self.provider.as_str(), model = %self.model))]
    async fn generate_structured(
        &self,
        request: StructuredRequest,
    ) -> DomainResult<serde_json::Value> {
        let url = format!("{}/chat/completions", self.base_url);
        let body = self.build_request(&request);

        debug!(url = %url, "POST chat completion");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                DomainError::BackendUnavailable(format!("chat completion request failed: {e}"))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            DomainError::BackendUnavailable(format!("failed to read chat completion response: {e}"))
        })?;

        if !status.is_success() {
            warn!(status = %status, "chat completion returned an error status");
            return Err(DomainError::BackendUnavailable(format!(
                "{} API returned {status}: {text}",
                self.provider.as_str()
            )));
        }

        let completion: ChatCompletionResponse = serde_json::from_str(&text).map_err(|e| {
            DomainError::SchemaValidationError(format!("unexpected completion envelope: {e}"))
        })?;

        if let Some(usage) = &completion.usage {
            info!(
                prompt_tokens = usage.prompt_tokens,
                completion_tokens = usage.completion_tokens,
                "chat completion succeeded"
            );
        }

        extract_tool_arguments(completion, &request.schema_name)
    }
}

// -- Chat completions request/response types --

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
    tools: Vec<ToolDefinition>,
    tool_choice: ToolChoice,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct ToolDefinition {
    #[serde(rename = "type")]
    tool_type: String,
    function: FunctionDefinition,
}

#[derive(Debug, Serialize)]
struct FunctionDefinition {
    name: String,
    description: String,
    parameters: serde_json::Value,
}

#[derive(Debug, Serialize)]
struct ToolChoice {
    #[serde(rename = "type")]
    choice_type: String,
    function: FunctionName,
}

#[derive(Debug, Serialize)]
struct FunctionName {
    name: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<CompletionUsage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: AssistantMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    name: String,
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct CompletionUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
}
