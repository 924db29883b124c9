//! Module `session`
//!
//! Tracks the shell root and the current directory. Actions resolve their
//! arguments against the session; the process working directory is never
//! changed.

use std::path::{Path, PathBuf};

use crate::guard::path::normalize_lexically;

/// Directory state of one shell session
#[derive(Debug, Clone)]
pub struct Session {
    root: PathBuf,
    current_dir: PathBuf,
}

impl Session {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            current_dir: root.clone(),
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Joins a validated relative argument onto the current directory.
    ///
    /// The argument is folded lexically first, so `a/./b/../c` resolves to
    /// `<cwd>/a/c`.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        let mut resolved = self.current_dir.clone();
        for segment in normalize_lexically(relative) {
            resolved.push(segment);
        }
        resolved
    }

    pub fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }

    /// `path` relative to the current directory, `.` for the directory itself
    pub fn display_relative(&self, path: &Path) -> String {
        match path.strip_prefix(&self.current_dir) {
            Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
            Ok(rel) => rel.display().to_string(),
            Err(_) => path.display().to_string(),
        }
    }
}
