//! Logging middleware
//!
//! Provides command logging functionality.

use log::{info, warn};

use crate::error::Denial;

/// Log a dispatched command
pub fn log_command(command: &str, args: &[String]) {
    info!("Executing {} with {} argument(s)", command, args.len());
}

/// Log a guard denial
pub fn log_denial(command: &str, denial: &Denial) {
    warn!("Denied {} ({}): {}", command, denial.kind, denial.message);
}
