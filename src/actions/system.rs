//! System information

use chrono::Local;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ShellResult;
use crate::guard::{GuardChain, ValidationRequest};
use crate::shell::Session;

pub fn show_date_time() -> String {
    let now = Local::now();
    format!(
        "📅 Date: {}\n⏰ Time: {}\n📆 Unix timestamp: {}",
        now.format("%A, %B %-d, %Y"),
        now.format("%H:%M:%S %Z"),
        now.timestamp()
    )
}

fn hostname() -> String {
    env::var("HOSTNAME")
        .or_else(|_| env::var("COMPUTERNAME"))
        .ok()
        .or_else(|| {
            fs::read_to_string("/etc/hostname")
                .ok()
                .map(|s| s.trim().to_string())
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn show_system_info(session: &Session) -> String {
    let cpus = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    let mut lines = vec![
        "=== System Information ===".to_string(),
        format!("💻 Hostname: {}", hostname()),
        format!("📂 Current Dir: {}", session.current_dir().display()),
        format!("🏠 Shell Root: {}", session.root().display()),
        format!("🔧 OS: {}", env::consts::OS),
        format!("🖥️  Architecture: {}", env::consts::ARCH),
        format!("⚙️  Shell Version: {}", env!("CARGO_PKG_VERSION")),
        format!("🧵 CPUs: {}", cpus),
        format!("📁 Temp Dir: {}", env::temp_dir().display()),
    ];
    if session.current_dir().join(".git").exists() {
        lines.push("🔀 Git repo: Yes".to_string());
    }
    lines.join("\n")
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// First executable named `name` in the directories of `search_path`.
pub fn find_in_path(name: &str, search_path: &std::ffi::OsStr) -> Option<PathBuf> {
    let candidates: Vec<String> = if cfg!(windows) {
        vec![name.to_string(), format!("{name}.exe")]
    } else {
        vec![name.to_string()]
    };

    env::split_paths(search_path).find_map(|dir| {
        candidates
            .iter()
            .map(|c| dir.join(c))
            .find(|p| is_executable(p))
    })
}

/// Locates a command in `PATH`. The name must be a bare file name.
pub fn which_command(name: &str) -> ShellResult<String> {
    GuardChain::new()
        .request(ValidationRequest::Filename(name))
        .evaluate()
        .into_result()?;

    let search_path = env::var_os("PATH").unwrap_or_default();
    Ok(match find_in_path(name, &search_path) {
        Some(path) => format!("✅ '{}' found at: {}", name, path.display()),
        None => format!("❌ Command '{}' not found in PATH", name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ShellError};

    #[test]
    fn test_date_time_lines() {
        let out = show_date_time();
        assert_eq!(out.lines().count(), 3);
        assert!(out.contains("📆 Unix timestamp: "));
    }

    #[test]
    fn test_system_info_mentions_os() {
        let dir = tempfile::tempdir().unwrap();
        let out = show_system_info(&Session::new(dir.path()));
        assert!(out.contains(env::consts::OS));
        assert!(!out.contains("Git repo"));
    }

    #[cfg(unix)]
    #[test]
    fn test_find_in_path() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("mytool");
        fs::write(&tool, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();
        fs::write(dir.path().join("plain"), "").unwrap();

        let search = env::join_paths([dir.path()]).unwrap();
        assert_eq!(find_in_path("mytool", &search), Some(tool));
        assert_eq!(find_in_path("plain", &search), None);
        assert_eq!(find_in_path("missing", &search), None);
    }

    #[test]
    fn test_which_rejects_paths() {
        match which_command("/bin/sh") {
            Err(ShellError::Denied(d)) => assert_eq!(d.kind, ErrorKind::IllegalCharacter),
            other => panic!("expected denial, got {:?}", other),
        }
    }
}
