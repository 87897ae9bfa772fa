use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use thiserror::Error;

use crate::domain::models::{AppConfig, LlmProvider};

/// Project config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "issueforge.yaml";

/// Optional local overrides, layered on top of the project file.
pub const LOCAL_CONFIG_FILE: &str = ".issueforge/local.yaml";

/// Prefix for nested overrides (`ISSUEFORGE_LLM__MODEL`).
pub const ENV_PREFIX: &str = "ISSUEFORGE_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    #[error("Invalid temperature: {0}. Must be between 0.0 and 2.0")]
    InvalidTemperature(f32),

    #[error("Invalid max_tokens: {0}. Must be at least 1")]
    InvalidMaxTokens(u32),

    #[error("Invalid {0} timeout: must be at least 1 second")]
    InvalidTimeout(&'static str),

    #[error("GitHub api_base_url cannot be empty")]
    EmptyApiBaseUrl,
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration relative to the current directory.
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `issueforge.yaml`, or the explicit `config_file`
    /// 3. `.issueforge/local.yaml` (optional)
    /// 4. Conventional variables: provider API key, `GITHUB_TOKEN`, `GITHUB_REPO`
    /// 5. `ISSUEFORGE_*` variables, nested with `__`
    pub fn load(config_file: Option<&Path>) -> Result<AppConfig> {
        Self::load_in(Path::new("."), config_file)
    }

    /// Same as [`load`](Self::load), resolving the default files under `dir`.
    pub fn load_in(dir: &Path, config_file: Option<&Path>) -> Result<AppConfig> {
        let primary: PathBuf = match config_file {
            Some(path) => {
                if !path.is_file() {
                    bail!("Config file not found: {}", path.display());
                }
                path.to_path_buf()
            }
            None => dir.join(DEFAULT_CONFIG_FILE),
        };
        let local = dir.join(LOCAL_CONFIG_FILE);

        let files = Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Yaml::file(&primary))
            .merge(Yaml::file(&local));

        // The provider decides which conventional key variable applies, so
        // resolve it from everything except the conventional layer first.
        let provider: LlmProvider = files
            .clone()
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract_inner("llm.provider")
            .context("Failed to read llm.provider")?;

        let config: AppConfig = files
            .merge(Self::conventional_env(provider))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn conventional_env(provider: LlmProvider) -> Figment {
        Figment::new()
            .merge(
                Env::raw()
                    .only(&[provider.api_key_env_var()])
                    .map(|_| "llm.api_key".into()),
            )
            .merge(Env::raw().only(&["GITHUB_TOKEN"]).map(|_| "github.token".into()))
            .merge(Env::raw().only(&["GITHUB_REPO"]).map(|_| "github.repo".into()))
    }

    /// Validate configuration after loading
    pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.to_lowercase().as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        if !(0.0..=2.0).contains(&config.llm.temperature) {
            return Err(ConfigError::InvalidTemperature(config.llm.temperature));
        }

        if config.llm.max_tokens == 0 {
            return Err(ConfigError::InvalidMaxTokens(config.llm.max_tokens));
        }

        if config.llm.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("llm"));
        }

        if config.github.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout("github"));
        }

        if config.github.api_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiBaseUrl);
        }

        Ok(())
    }
}
