//! Search term guard
//!
//! Terms are matched as literal substrings, so punctuation is allowed.

use crate::error::ErrorKind;
use crate::guard::outcome::ValidationOutcome;
use crate::guard::policy::MAX_SEARCH_TERM_LENGTH;

pub fn check_search_term(term: &str) -> ValidationOutcome {
    if term.trim().is_empty() {
        return ValidationOutcome::deny(ErrorKind::EmptyInput, "Search term cannot be empty");
    }

    if term.len() > MAX_SEARCH_TERM_LENGTH {
        return ValidationOutcome::deny(ErrorKind::TooLong, "Search term too long");
    }

    if term.contains('\0') {
        return ValidationOutcome::deny(ErrorKind::IllegalCharacter, "Invalid search term");
    }

    ValidationOutcome::Allowed
}

/// Caps free text appended to a file; the limit comes from the shell config.
pub fn check_text_payload(text: &str, max_length: usize) -> ValidationOutcome {
    if text.len() > max_length {
        return ValidationOutcome::deny(
            ErrorKind::TooLong,
            format!("Text too long (max {max_length} chars)"),
        );
    }
    if text.contains('\0') {
        return ValidationOutcome::deny(ErrorKind::IllegalCharacter, "Invalid text");
    }
    ValidationOutcome::Allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_allowed() {
        assert!(check_search_term("fn main() { $x | y; }").is_allowed());
        assert!(check_search_term(".*").is_allowed());
    }

    #[test]
    fn test_empty_denied() {
        assert_eq!(check_search_term("").kind(), Some(ErrorKind::EmptyInput));
        assert_eq!(check_search_term("  ").kind(), Some(ErrorKind::EmptyInput));
    }

    #[test]
    fn test_length_boundary() {
        assert!(check_search_term(&"x".repeat(MAX_SEARCH_TERM_LENGTH)).is_allowed());
        assert_eq!(
            check_search_term(&"x".repeat(MAX_SEARCH_TERM_LENGTH + 1)).kind(),
            Some(ErrorKind::TooLong)
        );
    }

    #[test]
    fn test_nul_denied() {
        assert_eq!(check_search_term("a\0").kind(), Some(ErrorKind::IllegalCharacter));
    }

    #[test]
    fn test_text_payload_limit() {
        assert!(check_text_payload("hello world", 11).is_allowed());
        assert_eq!(check_text_payload("hello world", 10).kind(), Some(ErrorKind::TooLong));
        assert!(check_text_payload("", 10).is_allowed());
    }
}
