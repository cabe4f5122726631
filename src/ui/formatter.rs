//! Formatting functions for diagnostics.
//!
//! Styling comes from `console`, which drops colors when the stream is not
//! a terminal, so pipeline logs stay plain.

use console::style;

use crate::cli::CheckOutcome;

/// Format an error line as printed to stderr.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold().for_stderr(), message)
}

/// Format a success line as printed to stdout.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green().for_stdout(), message)
}

/// Describe a passing check.
pub fn describe_outcome(outcome: &CheckOutcome) -> String {
    format!(
        "Chart {} version {} is greater than the latest published version {} ({} published)",
        outcome.app_name, outcome.candidate, outcome.latest, outcome.published
    )
}

/// Print an error message in red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{}", format_success(message));
}

pub fn display_outcome(outcome: &CheckOutcome) {
    display_success(&describe_outcome(outcome));
}
