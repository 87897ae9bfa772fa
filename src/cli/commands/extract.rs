//! `extract`: report text to an issue batch, without filing anything.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{AppConfig, IssueBatch};

use super::{extract_batch, read_input};

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Report file; reads stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Write the batch as JSON to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// An extracted batch, printed as a table or as re-submittable JSON.
#[derive(Debug, Serialize)]
pub struct BatchOutput {
    #[serde(flatten)]
    pub batch: IssueBatch,
}

impl CommandOutput for BatchOutput {
    fn to_human(&self) -> String {
        if self.batch.is_empty() {
            return "No issues extracted.".to_string();
        }
        format!(
            "Extracted {} issue(s):\n{}",
            self.batch.len(),
            TableFormatter::new().format_batch(&self.batch)
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub async fn execute(args: ExtractArgs, config: &AppConfig, json_mode: bool) -> Result<()> {
    let text = read_input(args.input.as_deref()).await?;
    let batch = extract_batch(config, &text, json_mode).await?;

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&batch).context("Failed to serialize batch")?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write batch to {}", path.display()))?;
        tracing::info!(path = %path.display(), count = batch.len(), "batch written");
    }

    output(&BatchOutput { batch }, json_mode);
    Ok(())
}
