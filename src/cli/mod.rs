//! Command-line interface.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use commands::{extract::ExtractArgs, run::RunArgs, submit::SubmitArgs};

#[derive(Parser, Debug)]
#[command(name = "issueforge")]
#[command(about = "Turn free-text feedback reports into labeled GitHub issues", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ./issueforge.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract issues from a report and file them
    Run(RunArgs),
    /// Extract issues from a report without filing them
    Extract(ExtractArgs),
    /// File a previously extracted batch
    Submit(SubmitArgs),
    /// List the labels issues may carry
    Labels,
}

/// Print an error and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let payload = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        eprintln!("{payload}");
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
