//! Error types
//!
//! Defines the guard taxonomy and the shell-level error that wraps it.

use std::fmt;
use std::io;

/// Reason a guard denied a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyInput,
    TooLong,
    PathTraversal,
    AbsolutePathRejected,
    IllegalCharacter,
    SensitivePathDenied,
    SizeLimitExceeded,
    TooManyArguments,
    RateLimited,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ErrorKind::EmptyInput => "empty input",
            ErrorKind::TooLong => "too long",
            ErrorKind::PathTraversal => "path traversal",
            ErrorKind::AbsolutePathRejected => "absolute path rejected",
            ErrorKind::IllegalCharacter => "illegal character",
            ErrorKind::SensitivePathDenied => "sensitive path denied",
            ErrorKind::SizeLimitExceeded => "size limit exceeded",
            ErrorKind::TooManyArguments => "too many arguments",
            ErrorKind::RateLimited => "rate limited",
        };
        f.write_str(label)
    }
}

/// A guard denial: the kind plus the message shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Denial {
    pub kind: ErrorKind,
    pub message: String,
}

impl Denial {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Denial {}

/// Errors surfaced by the shell while executing a command
#[derive(Debug)]
pub enum ShellError {
    Denied(Denial),
    Usage(String),
    UnknownCommand(String),
    NotADirectory(String),
    IoError(io::Error),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::Denied(d) => write!(f, "{}", d),
            ShellError::Usage(u) => write!(f, "Usage: {}", u),
            ShellError::UnknownCommand(c) => write!(f, "Unknown command: {}", c),
            ShellError::NotADirectory(p) => write!(f, "Not a directory: {}", p),
            ShellError::IoError(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ShellError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShellError::Denied(d) => Some(d),
            ShellError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Denial> for ShellError {
    fn from(denial: Denial) -> Self {
        ShellError::Denied(denial)
    }
}

impl From<io::Error> for ShellError {
    fn from(error: io::Error) -> Self {
        ShellError::IoError(error)
    }
}

impl From<walkdir::Error> for ShellError {
    fn from(error: walkdir::Error) -> Self {
        ShellError::IoError(io::Error::from(error))
    }
}

/// Shell result alias used by the action handlers
pub type ShellResult<T> = Result<T, ShellError>;
