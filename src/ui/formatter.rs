//! Pure formatting functions for step output.
//!
//! The Actions runner reads workflow commands (`::debug::`, `::error::` ...)
//! from stdout and step outputs from the `GITHUB_OUTPUT` file. Everything
//! here builds those strings without performing I/O, except the `display_*`
//! helpers which print human-facing status lines.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::MatchedMilestone;
use crate::error::{AutoMilestoneError, Result};

/// Escape message data for a workflow command.
pub fn escape_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Build a workflow command line, e.g. `::debug::message`.
pub fn format_command(command: &str, message: &str) -> String {
    format!("::{}::{}", command, escape_data(message))
}

/// Build an entry for the `GITHUB_OUTPUT` file.
///
/// Single-line values use `name=value`. Multi-line values use the
/// `name<<delimiter` heredoc form.
///
/// # Errors
/// Returns an error if `name` or `value` contains `delimiter`, or if `name`
/// spans more than one line.
pub fn format_output_entry(name: &str, value: &str, delimiter: &str) -> Result<String> {
    if name.contains(delimiter) {
        return Err(AutoMilestoneError::output(format!(
            "Output name '{}' contains the delimiter",
            name
        )));
    }
    if value.contains(delimiter) {
        return Err(AutoMilestoneError::output(format!(
            "Value of output '{}' contains the delimiter",
            name
        )));
    }
    if name.contains('\n') || name.contains('\r') {
        return Err(AutoMilestoneError::output(format!(
            "Output name '{}' spans more than one line",
            escape_data(name)
        )));
    }

    if value.contains('\n') || value.contains('\r') {
        Ok(format!("{}<<{}\n{}\n{}\n", name, delimiter, value, delimiter))
    } else {
        Ok(format!("{}={}\n", name, value))
    }
}

/// Describe the matched milestones, lowest version first.
///
/// Each entry shows the title as written and the normalised version.
pub fn format_matched_milestones(matched: &[MatchedMilestone<'_>]) -> String {
    let entries: Vec<String> = matched
        .iter()
        .map(|m| format!("#{} {} ({})", m.milestone.number, m.milestone.title, m.version))
        .collect();
    format!("Matched milestones: {}", entries.join(", "))
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning with a yellow icon.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    println!("{} {}", style("⚠").yellow().bold(), warning);
}

/// Display the milestone chosen for the target.
pub fn display_selected_milestone(number: u64, title: &str, target_number: u64) {
    println!(
        "\n{}\n  Milestone: {} (#{})\n  Target:    #{}",
        style("Selected Milestone:").bold(),
        style(title).green(),
        number,
        target_number
    );
}
