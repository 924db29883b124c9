//! Error handlers
//!
//! Logs shell errors and renders them for the prompt.

use crate::error::types::ShellError;
use log::{error, warn};

/// Log a shell error at a level matching its severity
pub fn handle_error(err: &ShellError) {
    match err {
        ShellError::Denied(d) => warn!("Denied ({}): {}", d.kind, d.message),
        ShellError::IoError(e) => error!("Filesystem error: {}", e),
        other => warn!("{}", other),
    }
}

/// Convert an error to the line printed back to the user
pub fn error_to_message(err: &ShellError) -> String {
    match err {
        ShellError::Denied(d) => format!("❌ Error: {}", d.message),
        ShellError::Usage(_) | ShellError::UnknownCommand(_) => err.to_string(),
        ShellError::NotADirectory(_) | ShellError::IoError(_) => format!("Error: {}", err),
    }
}
