//! Path guard
//!
//! Validates relative paths used for navigation, size walks, moves and copies.

use crate::error::ErrorKind;
use crate::guard::outcome::ValidationOutcome;
use crate::guard::policy::MAX_PATH_LENGTH;

/// Decides whether `path` may be used to reach a location under the working tree.
pub fn check_path(path: &str) -> ValidationOutcome {
    if path.trim().is_empty() {
        return ValidationOutcome::deny(ErrorKind::EmptyInput, "Path cannot be empty");
    }

    if path.len() > MAX_PATH_LENGTH {
        return ValidationOutcome::deny(ErrorKind::TooLong, "Path exceeds maximum length");
    }

    if is_absolute(path) {
        return ValidationOutcome::deny(
            ErrorKind::AbsolutePathRejected,
            "Access denied - Invalid path",
        );
    }

    if normalize_lexically(path).iter().any(|segment| *segment == "..") {
        return ValidationOutcome::deny(ErrorKind::PathTraversal, "Access denied - Invalid path");
    }

    if path.contains(['\0', ';']) {
        return ValidationOutcome::deny(
            ErrorKind::IllegalCharacter,
            "Access denied - Invalid path",
        );
    }

    ValidationOutcome::Allowed
}

/// Rooted (`/x`, `\x`) or drive-prefixed (`C:x`) paths are absolute on some platform.
pub fn is_absolute(path: &str) -> bool {
    if path.starts_with(['/', '\\']) {
        return true;
    }
    let mut chars = path.chars();
    matches!(
        (chars.next(), chars.next()),
        (Some(drive), Some(':')) if drive.is_ascii_alphabetic()
    )
}

/// Folds `.`, empty and `name/..` segments without consulting the filesystem.
///
/// Both `/` and `\` separate segments. A `..` that cannot be folded stays at
/// the front of the result, so a path escaping its base keeps a `..` segment.
pub fn normalize_lexically(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }
    segments
}
