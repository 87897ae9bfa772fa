//! CLI command implementations.

pub mod extract;
pub mod labels;
pub mod run;
pub mod submit;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::AsyncReadExt;

use crate::adapters::github::GitHubClient;
use crate::adapters::llm::build_backend;
use crate::cli::output::{create_spinner_with_message, ProgressBarExt};
use crate::domain::models::{AppConfig, Destination, IssueBatch};
use crate::services::{IssueExtractor, IssueSubmitter};

/// Read the report from a file, or from stdin when the path is absent or `-`.
pub async fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file {}", path.display())),
        _ => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("Failed to read report from stdin")?;
            Ok(text)
        }
    }
}

/// Repository from the flag or configuration, token from configuration.
pub fn resolve_destination(config: &AppConfig, repo_flag: Option<&str>) -> Result<Destination> {
    let repo = repo_flag.or(config.github.repo.as_deref());
    Ok(Destination::new(repo, config.github.token.as_deref())?)
}

/// Run one extraction behind a spinner.
pub async fn extract_batch(config: &AppConfig, text: &str, json_mode: bool) -> Result<IssueBatch> {
    let llm = build_backend(&config.llm)?;
    let extractor = IssueExtractor::new(llm);

    let show_spinner = !json_mode && console::Term::stderr().is_term();
    let spinner = create_spinner_with_message(
        format!("Extracting issues with {}...", config.llm.effective_model()),
        show_spinner,
    );

    match extractor.extract(text).await {
        Ok(batch) => {
            spinner.finish_success(format!("Extracted {} issue(s)", batch.len()));
            Ok(batch)
        }
        Err(err) => {
            spinner.finish_error("Extraction failed");
            Err(err).context("Issue extraction failed")
        }
    }
}

pub fn build_submitter(config: &AppConfig) -> Result<IssueSubmitter> {
    let client = GitHubClient::new(&config.github)?;
    Ok(IssueSubmitter::new(Arc::new(client)))
}
