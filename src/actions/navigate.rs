//! Navigation operations
//!
//! Directory changes, listings and tree walks rooted at the session
//! directory.

use log::{debug, info};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::actions::format::{format_mode, human_size};
use crate::error::{ShellError, ShellResult};
use crate::guard::{GuardChain, ValidationRequest};
use crate::shell::Session;

fn check_path_arg(path: &str) -> ShellResult<()> {
    GuardChain::new()
        .request(ValidationRequest::Path(path))
        .evaluate()
        .into_result()?;
    Ok(())
}

/// Changes the session directory; the target must be an existing directory.
pub fn change_directory(session: &mut Session, path: &str) -> ShellResult<String> {
    check_path_arg(path)?;

    let target = session.resolve(path);
    let metadata = fs::metadata(&target)?;
    if !metadata.is_dir() {
        return Err(ShellError::NotADirectory(path.to_string()));
    }

    info!("Changed directory to {}", target.display());
    session.set_current_dir(target);
    Ok(String::new())
}

pub fn print_working_dir(session: &Session) -> String {
    format!("📂 Current directory: {}", session.current_dir().display())
}

/// Entries of the session directory, sorted by name.
pub fn list_items(session: &Session) -> ShellResult<String> {
    let mut entries = fs::read_dir(session.current_dir())?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut out = String::from("Mode        Size         Name\n----        ----         ----");
    for entry in entries {
        let metadata = entry.metadata()?;
        let indicator = if metadata.is_dir() { "📁" } else { "📄" };
        out.push_str(&format!(
            "\n{:<10}  {:<10}   {} {}",
            format_mode(&metadata),
            metadata.len(),
            indicator,
            entry.file_name().to_string_lossy()
        ));
    }
    Ok(out)
}

/// Total size of a file, or of every file below a directory.
pub fn show_size(session: &Session, path: &str) -> ShellResult<String> {
    check_path_arg(path)?;

    let root = session.resolve(path);
    let mut total: u64 = 0;
    for entry in WalkDir::new(&root) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            total += entry.metadata()?.len();
        }
    }

    debug!("Size of {}: {} bytes", root.display(), total);
    Ok(format!("Size of '{}': {}", path, human_size(total)))
}

/// Files and directories directly inside `path`.
pub fn count_files(session: &Session, path: &str) -> ShellResult<String> {
    check_path_arg(path)?;

    let (mut dirs, mut files) = (0, 0);
    for entry in fs::read_dir(session.resolve(path))? {
        if entry?.file_type()?.is_dir() {
            dirs += 1;
        } else {
            files += 1;
        }
    }

    Ok(format!(
        "📊 Directory '{}' contains:\n  📁 {} directories\n  📄 {} files\n  📦 Total: {} items",
        path,
        dirs,
        files,
        dirs + files
    ))
}

/// Box-drawing tree of `path`. Symlinked directories are not followed.
pub fn show_tree(session: &Session, path: &str) -> ShellResult<String> {
    check_path_arg(path)?;

    let root = session.resolve(path);
    let mut out = format!("📁 {}", path);
    draw_tree(&root, "", &mut out)?;
    Ok(out)
}

fn draw_tree(dir: &Path, prefix: &str, out: &mut String) -> ShellResult<()> {
    let mut entries = fs::read_dir(dir)?.collect::<Result<Vec<_>, _>>()?;
    entries.sort_by_key(|entry| entry.file_name());

    let last = entries.len().saturating_sub(1);
    for (i, entry) in entries.iter().enumerate() {
        let is_dir = entry.file_type()?.is_dir();
        let (branch, indent) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        let icon = if is_dir { "📁" } else { "📄" };
        out.push_str(&format!(
            "\n{}{}{} {}",
            prefix,
            branch,
            icon,
            entry.file_name().to_string_lossy()
        ));

        if is_dir {
            draw_tree(&entry.path(), &format!("{}{}", prefix, indent), out)?;
        }
    }
    Ok(())
}

/// Entries below the session directory whose name contains `term`.
///
/// Unreadable entries are skipped rather than aborting the walk.
pub fn find_files(session: &Session, term: &str) -> ShellResult<String> {
    GuardChain::new()
        .request(ValidationRequest::SearchTerm(term))
        .evaluate()
        .into_result()?;

    let root = session.current_dir();
    let mut out = format!("Searching for '{}' in current directory...", term);
    let mut found = 0;
    for entry in WalkDir::new(root).sort_by_file_name().into_iter().filter_map(Result::ok) {
        if entry.file_name().to_string_lossy().contains(term) {
            out.push_str(&format!("\n  📍 {}", session.display_relative(entry.path())));
            found += 1;
        }
    }

    if found == 0 {
        out.push_str(&format!("\nNo files found matching '{}'", term));
    } else {
        out.push_str(&format!("\nFound {} matching file(s)", found));
    }
    Ok(out)
}
