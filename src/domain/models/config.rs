use serde::{Deserialize, Serialize};

/// Main configuration structure for issueforge
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AppConfig {
    /// Model backend configuration
    #[serde(default)]
    pub llm: LlmConfig,

    /// Issue tracker configuration
    #[serde(default)]
    pub github: GitHubConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Supported model backends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// Groq's OpenAI-compatible endpoint
    #[default]
    Groq,
    /// OpenAI chat completions
    OpenAi,
    /// Anthropic Messages API
    Anthropic,
}

impl LlmProvider {
    /// Model used when none is configured.
    pub const fn default_model(self) -> &'static str {
        match self {
            Self::Groq => "openai/gpt-oss-120b",
            Self::OpenAi => "gpt-4o-mini",
            Self::Anthropic => "claude-3-5-sonnet-20241022",
        }
    }

    /// API base URL used when none is configured.
    pub const fn default_base_url(self) -> &'static str {
        match self {
            Self::Groq => "https://api.groq.com/openai/v1",
            Self::OpenAi => "https://api.openai.com/v1",
            Self::Anthropic => "https://api.anthropic.com",
        }
    }

    /// Conventional environment variable holding the API key.
    pub const fn api_key_env_var(self) -> &'static str {
        match self {
            Self::Groq => "GROQ_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
            Self::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Groq => "groq",
            Self::OpenAi => "openai",
            Self::Anthropic => "anthropic",
        }
    }
}

/// Model backend configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LlmConfig {
    /// Which backend to call
    #[serde(default)]
    pub provider: LlmProvider,

    /// Model identifier; provider default when unset
    #[serde(default)]
    pub model: Option<String>,

    /// API key; usually supplied through the provider's env var
    #[serde(default)]
    pub api_key: Option<String>,

    /// API base URL; provider default when unset
    #[serde(default)]
    pub base_url: Option<String>,

    /// Sampling temperature (0.0-2.0)
    #[serde(default)]
    pub temperature: f32,

    /// Maximum tokens the model may generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Request timeout in seconds
    #[serde(default = "default_llm_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_max_tokens() -> u32 {
    4096
}

const fn default_llm_timeout_secs() -> u64 {
    120
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            model: None,
            api_key: None,
            base_url: None,
            temperature: 0.0,
            max_tokens: default_max_tokens(),
            timeout_secs: default_llm_timeout_secs(),
        }
    }
}

impl LlmConfig {
    /// Configured model, or the provider's default.
    pub fn effective_model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or_else(|| self.provider.default_model())
    }

    /// Configured base URL without a trailing slash, or the provider's default.
    pub fn effective_base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .map_or_else(|| self.provider.default_base_url(), |u| u.trim_end_matches('/'))
    }
}

/// Issue tracker (GitHub) configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct GitHubConfig {
    /// Personal access token
    #[serde(default)]
    pub token: Option<String>,

    /// Target repository as `owner/name`
    #[serde(default)]
    pub repo: Option<String>,

    /// REST API base URL
    #[serde(default = "default_github_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_github_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header (required by the GitHub API)
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_github_api_base_url() -> String {
    "https://api.github.com".to_string()
}

const fn default_github_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    "issueforge".to_string()
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            token: None,
            repo: None,
            api_base_url: default_github_api_base_url(),
            timeout_secs: default_github_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for JSON log files; stderr only when unset
    #[serde(default)]
    pub log_dir: Option<String>,

    /// File rotation: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_defaults() {
        let llm = LlmConfig::default();
        assert_eq!(llm.provider, LlmProvider::Groq);
        assert_eq!(llm.effective_model(), "openai/gpt-oss-120b");
        assert_eq!(llm.effective_base_url(), "https://api.groq.com/openai/v1");
        assert!(llm.temperature.abs() < f32::EPSILON);
    }

    #[test]
    fn test_effective_overrides() {
        let llm = LlmConfig {
            provider: LlmProvider::Anthropic,
            model: Some("claude-custom".to_string()),
            base_url: Some("http://localhost:8080/".to_string()),
            ..Default::default()
        };
        assert_eq!(llm.effective_model(), "claude-custom");
        assert_eq!(llm.effective_base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_provider_serde_names() {
        assert_eq!(serde_json::to_string(&LlmProvider::OpenAi).unwrap(), "\"openai\"");
        let p: LlmProvider = serde_json::from_str("\"anthropic\"").unwrap();
        assert_eq!(p, LlmProvider::Anthropic);
        assert_eq!(LlmProvider::Groq.api_key_env_var(), "GROQ_API_KEY");
    }

    #[test]
    fn test_github_defaults() {
        let gh = GitHubConfig::default();
        assert_eq!(gh.api_base_url, "https://api.github.com");
        assert_eq!(gh.user_agent, "issueforge");
        assert!(gh.token.is_none());
        assert!(gh.repo.is_none());
    }
}
