//! Guard requests and outcomes

use crate::error::{Denial, ErrorKind};
use crate::guard::{check_command, check_filename, check_path, check_search_term};

/// A piece of untrusted input tagged with the guard that must judge it.
#[derive(Debug, Clone, Copy)]
pub enum ValidationRequest<'a> {
    Path(&'a str),
    Filename(&'a str),
    SearchTerm(&'a str),
    CommandLine { command: &'a str, args: &'a [String] },
}

impl ValidationRequest<'_> {
    /// Runs the guard matching this request.
    pub fn check(&self) -> ValidationOutcome {
        match *self {
            ValidationRequest::Path(path) => check_path(path),
            ValidationRequest::Filename(name) => check_filename(name),
            ValidationRequest::SearchTerm(term) => check_search_term(term),
            ValidationRequest::CommandLine { command, args } => check_command(command, args),
        }
    }
}

/// Binary result of a guard evaluation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Allowed,
    Denied(Denial),
}

impl ValidationOutcome {
    pub fn deny(kind: ErrorKind, message: impl Into<String>) -> Self {
        ValidationOutcome::Denied(Denial::new(kind, message))
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, ValidationOutcome::Allowed)
    }

    pub fn is_denied(&self) -> bool {
        !self.is_allowed()
    }

    /// The denial kind, if any
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ValidationOutcome::Allowed => None,
            ValidationOutcome::Denied(d) => Some(d.kind),
        }
    }

    /// Converts into a `Result` so callers can use `?`.
    pub fn into_result(self) -> Result<(), Denial> {
        match self {
            ValidationOutcome::Allowed => Ok(()),
            ValidationOutcome::Denied(d) => Err(d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_dispatches_to_matching_guard() {
        let args = vec!["a".to_string(); 11];
        assert_eq!(
            ValidationRequest::CommandLine {
                command: "gx",
                args: &args
            }
            .check()
            .kind(),
            Some(ErrorKind::TooManyArguments)
        );
        assert_eq!(
            ValidationRequest::Path("/etc").check().kind(),
            Some(ErrorKind::AbsolutePathRejected)
        );
        assert_eq!(
            ValidationRequest::Filename("a/b").check().kind(),
            Some(ErrorKind::IllegalCharacter)
        );
        assert_eq!(
            ValidationRequest::SearchTerm("").check().kind(),
            Some(ErrorKind::EmptyInput)
        );
        assert!(ValidationRequest::Filename("ok.txt").check().is_allowed());
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationOutcome::Allowed.into_result(), Ok(()));
        let denied = ValidationOutcome::deny(ErrorKind::TooLong, "too long");
        assert_eq!(
            denied.into_result(),
            Err(Denial::new(ErrorKind::TooLong, "too long"))
        );
    }
}
