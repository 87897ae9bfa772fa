//! Structured-output model backend port.
//!
//! A backend receives a system instruction, the user text, and a JSON Schema,
//! and must answer with a JSON value produced under that schema (a forced
//! tool/function call). Backends do not interpret the value; the caller
//! decides whether it fits the domain types.

use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// One schema-constrained generation request.
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    /// System-role instruction
    pub system: String,

    /// User-role content (the raw report text)
    pub user: String,

    /// Name the schema is exposed under (tool/function name)
    pub schema_name: String,

    /// Human-readable description of the expected output
    pub schema_description: String,

    /// JSON Schema the output must conform to
    pub schema: serde_json::Value,
}

/// A model backend capable of schema-constrained output.
///
/// Errors:
/// - `BackendUnavailable` when the backend cannot be reached or refuses the call
/// - `SchemaValidationError` when it answers without a structured payload
#[async_trait]
pub trait StructuredLlm: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Model identifier the backend will call.
    fn model(&self) -> &str;

    /// Run one generation and return the raw structured payload.
    async fn generate_structured(&self, request: StructuredRequest)
        -> DomainResult<serde_json::Value>;
}
