//! Step output - workflow commands, step outputs and status lines.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Writing commands to stdout and outputs to `GITHUB_OUTPUT`

use std::env;
use std::fs::OpenOptions;
use std::io::Write;

use uuid::Uuid;

use crate::error::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_selected_milestone, display_status, display_success,
};

/// Environment variable naming the file step outputs are appended to
pub const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

/// Emit a debug message; shown only when step debug logging is enabled.
pub fn debug(message: &str) {
    println!("{}", formatter::format_command("debug", message));
}

/// Record a step output.
///
/// Appends to the file named by `GITHUB_OUTPUT`, using a random heredoc
/// delimiter per entry. Outside a runner, where the variable is unset,
/// falls back to the legacy `::set-output` command.
///
/// # Errors
/// Returns an error if the output file cannot be opened or written, or if
/// the value contains the generated delimiter.
pub fn set_output(name: &str, value: &str) -> Result<()> {
    match env::var_os(OUTPUT_FILE_ENV) {
        Some(path) if !path.is_empty() => {
            let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
            let entry = formatter::format_output_entry(name, value, &delimiter)?;
            let mut file = OpenOptions::new().create(true).append(true).open(path)?;
            file.write_all(entry.as_bytes())?;
            Ok(())
        }
        _ => {
            println!(
                "::set-output name={}::{}",
                name,
                formatter::escape_data(value)
            );
            Ok(())
        }
    }
}

/// Report the step as failed with `message`.
///
/// The caller is responsible for the non-zero exit code.
pub fn set_failed(message: &str) {
    println!("{}", formatter::format_command("error", message));
}
