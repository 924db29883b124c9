//! Filename guard
//!
//! Validates bare leaf names. Nested paths never pass through a filename
//! parameter.

use crate::error::ErrorKind;
use crate::guard::outcome::ValidationOutcome;
use crate::guard::policy::{MAX_FILENAME_LENGTH, SHELL_METACHARACTERS};

/// Decides whether `name` is a safe leaf name for create/delete/read targets.
pub fn check_filename(name: &str) -> ValidationOutcome {
    if name.trim().is_empty() {
        return ValidationOutcome::deny(ErrorKind::EmptyInput, "Filename cannot be empty");
    }

    if name.len() > MAX_FILENAME_LENGTH {
        return ValidationOutcome::deny(
            ErrorKind::TooLong,
            format!("Filename exceeds maximum length ({MAX_FILENAME_LENGTH} chars)"),
        );
    }

    if name.contains(['/', '\\']) {
        return ValidationOutcome::deny(
            ErrorKind::IllegalCharacter,
            "Filename cannot contain path separators",
        );
    }

    if name.contains("..") {
        return ValidationOutcome::deny(ErrorKind::PathTraversal, "Invalid filename");
    }

    if name.contains('\0') {
        return ValidationOutcome::deny(ErrorKind::IllegalCharacter, "Invalid filename");
    }

    if name.contains(SHELL_METACHARACTERS) {
        return ValidationOutcome::deny(
            ErrorKind::IllegalCharacter,
            "Filename contains invalid characters",
        );
    }

    ValidationOutcome::Allowed
}
