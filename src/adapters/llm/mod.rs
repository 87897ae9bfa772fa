//! Model backends implementing [`StructuredLlm`].
//!
//! Groq and OpenAI share the chat completions dialect; Anthropic has its own
//! Messages API. [`build_backend`] picks one from configuration.

pub mod anthropic;
pub mod anthropic_types;
pub mod openai_compat;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{LlmConfig, LlmProvider};
use crate::domain::ports::StructuredLlm;

pub use anthropic::AnthropicBackend;
pub use openai_compat::OpenAiCompatibleBackend;

/// Construct the backend named by `config.provider`.
pub fn build_backend(config: &LlmConfig) -> DomainResult<Arc<dyn StructuredLlm>> {
    let backend: Arc<dyn StructuredLlm> = match config.provider {
        LlmProvider::Groq | LlmProvider::OpenAi => Arc::new(OpenAiCompatibleBackend::new(config)?),
        LlmProvider::Anthropic => Arc::new(AnthropicBackend::new(config)?),
    };
    Ok(backend)
}

pub(crate) fn build_http_client(timeout_secs: u64) -> DomainResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| DomainError::BackendUnavailable(format!("failed to build HTTP client: {e}")))
}

/// API key from configuration, falling back to the provider's env var.
pub(crate) fn resolve_api_key(config: &LlmConfig) -> DomainResult<String> {
    let env_var = config.provider.api_key_env_var();
    config
        .api_key
        .clone()
        .or_else(|| std::env::var(env_var).ok())
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or_else(|| DomainError::BackendUnavailable(format!("{env_var} is not set")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_api_key_prefers_config() {
        temp_env::with_var("GROQ_API_KEY", Some("gsk_env"), || {
            let config = LlmConfig {
                api_key: Some("gsk_config".to_string()),
                ..Default::default()
            };
            assert_eq!(resolve_api_key(&config).unwrap(), "gsk_config");
        });
    }

    #[test]
    fn test_resolve_api_key_from_env() {
        temp_env::with_var("ANTHROPIC_API_KEY", Some("sk-ant-env"), || {
            let config = LlmConfig {
                provider: LlmProvider::Anthropic,
                ..Default::default()
            };
            assert_eq!(resolve_api_key(&config).unwrap(), "sk-ant-env");
        });
    }

    #[test]
    fn test_resolve_api_key_blank_is_missing() {
        temp_env::with_var("OPENAI_API_KEY", Some("   "), || {
            let config = LlmConfig {
                provider: LlmProvider::OpenAi,
                ..Default::default()
            };
            let err = resolve_api_key(&config).unwrap_err();
            assert!(matches!(err, DomainError::BackendUnavailable(_)));
            assert!(err.to_string().contains("OPENAI_API_KEY"));
        });
    }

    #[test]
    fn test_build_backend_selects_provider() {
        let groq = build_backend(&LlmConfig {
            api_key: Some("gsk_test".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(groq.name(), "groq");

        let claude = build_backend(&LlmConfig {
            provider: LlmProvider::Anthropic,
            api_key: Some("sk-ant-test".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(claude.name(), "anthropic");
        assert_eq!(claude.model(), "claude-3-5-sonnet-20241022");
    }
}
