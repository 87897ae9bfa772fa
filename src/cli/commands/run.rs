//! `run`: extract issues from a report, then file each one.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::info;

use crate::cli::output::output;
use crate::domain::models::AppConfig;

use super::extract::BatchOutput;
use super::{build_submitter, extract_batch, read_input, resolve_destination, submit};

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Report file; reads stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Target repository as owner/name (overrides config)
    #[arg(short, long)]
    pub repo: Option<String>,

    /// Stop after extraction and print the batch
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn execute(args: RunArgs, config: &AppConfig, json_mode: bool) -> Result<()> {
    // Resolve the destination first so a missing token fails before the model call.
    let destination = if args.dry_run {
        None
    } else {
        Some(resolve_destination(config, args.repo.as_deref())?)
    };

    let text = read_input(args.input.as_deref()).await?;
    let batch = extract_batch(config, &text, json_mode).await?;

    let Some(destination) = destination else {
        output(&BatchOutput { batch }, json_mode);
        return Ok(());
    };

    info!(count = batch.len(), repo = destination.repo(), "submitting extracted issues");
    let submitter = build_submitter(config)?;
    let report = submitter.submit_batch(&destination, &batch).await;
    submit::finish(report, json_mode)
}
