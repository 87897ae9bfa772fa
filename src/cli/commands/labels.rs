//! `labels`: print the closed label set.

use serde::Serialize;

use crate::cli::output::{output, CommandOutput, TableFormatter};
use crate::domain::models::Label;

#[derive(Debug, Serialize)]
pub struct LabelsOutput {
    pub labels: Vec<Label>,
}

impl CommandOutput for LabelsOutput {
    fn to_human(&self) -> String {
        TableFormatter::new().format_labels(&self.labels)
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(json_mode: bool) {
    output(
        &LabelsOutput {
            labels: Label::ALL.to_vec(),
        },
        json_mode,
    );
}
