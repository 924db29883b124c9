//! Sensitive path blocklist
//!
//! Case-insensitive substring match against [`SENSITIVE_PATH_FRAGMENTS`].
//! This is a heuristic: it does not canonicalize, so a disguised path one
//! level below a protected location can still pass, and any name containing
//! a bare fragment such as `system` is refused.

use crate::error::ErrorKind;
use crate::guard::outcome::ValidationOutcome;
use crate::guard::policy::SENSITIVE_PATH_FRAGMENTS;

pub fn is_sensitive_path(path: &str) -> bool {
    let lower = path.to_lowercase();
    SENSITIVE_PATH_FRAGMENTS
        .iter()
        .any(|fragment| lower.contains(fragment))
}

/// Outcome form of [`is_sensitive_path`] for use in a guard chain.
pub fn check_not_sensitive(path: &str) -> ValidationOutcome {
    if is_sensitive_path(path) {
        ValidationOutcome::deny(
            ErrorKind::SensitivePathDenied,
            "Access denied - Cannot delete this path",
        )
    } else {
        ValidationOutcome::Allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_locations_are_sensitive() {
        assert!(is_sensitive_path("/etc/shadow"));
        assert!(is_sensitive_path("/usr/bin/env"));
        assert!(is_sensitive_path("C:\\WINDOWS\\System32"));
        assert!(is_sensitive_path(".bashrc"));
        assert!(is_sensitive_path(".SSH"));
        assert!(is_sensitive_path("boot.ini"));
    }

    #[test]
    fn test_etc_fragment_needs_both_slashes() {
        assert!(!is_sensitive_path("project/etc_notes.txt"));
        assert!(!is_sensitive_path("etc_notes.txt"));
        assert!(!is_sensitive_path("notes_etc_plan.txt"));
        assert!(is_sensitive_path("project/etc/notes.txt"));
    }

    #[test]
    fn test_ordinary_names_pass() {
        assert!(!is_sensitive_path("myssh_backup"));
        assert!(!is_sensitive_path("report.txt"));
        assert!(!is_sensitive_path("build"));
    }

    #[test]
    fn test_bare_fragment_false_positive() {
        assert!(is_sensitive_path("filesystem_notes.txt"));
    }

    #[test]
    fn test_check_not_sensitive() {
        assert_eq!(
            check_not_sensitive(".ssh").kind(),
            Some(ErrorKind::SensitivePathDenied)
        );
        assert!(check_not_sensitive("scratch").is_allowed());
    }
}
