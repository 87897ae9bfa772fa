//! Spinner shown while the model call is in flight.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "[{elapsed_precise}] {spinner:.green} {msg}";
const SPINNER_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Create a spinner on stderr, or a hidden bar when `visible` is false.
///
/// Falls back to the default spinner style if the template fails to parse.
pub fn create_spinner_with_message(message: impl Into<String>, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }

    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template(SPINNER_TEMPLATE)
        .map_or_else(|_| ProgressStyle::default_spinner(), |s| s.tick_chars(SPINNER_CHARS));
    spinner.set_style(style);
    spinner.set_message(message.into());
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Extension trait for ProgressBar to add common utility methods
pub trait ProgressBarExt {
    /// Finish with a success message (green checkmark)
    fn finish_success(&self, message: impl Into<String>);

    /// Finish with an error message (red X)
    fn finish_error(&self, message: impl Into<String>);
}

impl ProgressBarExt for ProgressBar {
    fn finish_success(&self, message: impl Into<String>) {
        self.finish_with_message(format!("✓ {}", message.into()));
    }

    fn finish_error(&self, message: impl Into<String>) {
        self.finish_with_message(format!("✗ {}", message.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_spinner() {
        let spinner = create_spinner_with_message("Extracting issues...", false);
        assert!(spinner.is_hidden());
        spinner.finish_success("done");
        assert!(spinner.is_finished());
    }

    #[test]
    fn test_visible_spinner_keeps_message() {
        let spinner = create_spinner_with_message("Extracting issues...", true);
        assert_eq!(spinner.message(), "Extracting issues...");
        spinner.finish_error("failed");
        assert_eq!(spinner.message(), "✗ failed");
    }
}
