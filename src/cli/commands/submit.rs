//! `submit`: file a saved batch.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::{AppConfig, IssueBatch, SubmissionReport};

use super::{build_submitter, resolve_destination};

#[derive(Args, Debug)]
pub struct SubmitArgs {
    /// Batch JSON produced by `extract --output`
    pub batch_file: PathBuf,

    /// Target repository as owner/name (overrides config)
    #[arg(short, long)]
    pub repo: Option<String>,
}

/// Per-issue outcomes plus totals.
#[derive(Debug, Serialize)]
pub struct ReportOutput {
    #[serde(flatten)]
    pub report: SubmissionReport,
    pub succeeded: usize,
    pub failed: usize,
}

impl From<SubmissionReport> for ReportOutput {
    fn from(report: SubmissionReport) -> Self {
        Self {
            succeeded: report.succeeded(),
            failed: report.failed(),
            report,
        }
    }
}

impl CommandOutput for ReportOutput {
    fn to_human(&self) -> String {
        if self.report.results.is_empty() {
            return format!("No issues to submit to {}.", self.report.repo);
        }
        format!(
            "{}\nCreated {} of {} issue(s) in {}.",
            TableFormatter::new().format_report(&self.report),
            self.succeeded,
            self.report.results.len(),
            self.report.repo
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Print the report and turn any failed item into an error exit.
pub fn finish(report: SubmissionReport, json_mode: bool) -> Result<()> {
    let out = ReportOutput::from(report);
    output(&out, json_mode);
    if out.failed > 0 {
        bail!(
            "{} of {} issue(s) failed to submit",
            out.failed,
            out.report.results.len()
        );
    }
    Ok(())
}

pub async fn execute(args: SubmitArgs, config: &AppConfig, json_mode: bool) -> Result<()> {
    let destination = resolve_destination(config, args.repo.as_deref())?;

    let json = tokio::fs::read_to_string(&args.batch_file)
        .await
        .with_context(|| format!("Failed to read batch file {}", args.batch_file.display()))?;
    let batch = IssueBatch::from_json_str(&json)
        .with_context(|| format!("Invalid batch file {}", args.batch_file.display()))?;

    let submitter = build_submitter(config)?;
    let report = submitter.submit_batch(&destination, &batch).await;
    finish(report, json_mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::models::{CreatedIssue, SubmissionResult};

    fn mixed_report() -> SubmissionReport {
        SubmissionReport::new("acme/widgets")
            .with_result(SubmissionResult::from_attempt(
                "ok",
                Ok(CreatedIssue {
                    number: 1,
                    html_url: String::new(),
                    title: "ok".to_string(),
                }),
            ))
            .with_result(SubmissionResult::from_attempt(
                "bad",
                Err(DomainError::NetworkError("timed out".to_string())),
            ))
    }

    #[test]
    fn test_report_output_json() {
        let json = ReportOutput::from(mixed_report()).to_json();
        assert_eq!(json["repo"], "acme/widgets");
        assert_eq!(json["succeeded"], 1);
        assert_eq!(json["failed"], 1);
        assert_eq!(json["results"][0]["status"], "created");
        assert_eq!(json["results"][1]["status"], "network_failure");
    }

    #[test]
    fn test_finish_fails_on_any_item_failure() {
        let err = finish(mixed_report(), true).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 issue(s) failed to submit");
        assert!(finish(SubmissionReport::new("acme/widgets"), true).is_ok());
    }
}
