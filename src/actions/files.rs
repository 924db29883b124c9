//! File operations
//!
//! Create, delete, move, copy and rewrite entries under the session
//! directory. Every operation runs its guard chain before touching the
//! filesystem.

use log::{debug, info};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::SystemTime;

use crate::error::{ErrorKind, ShellResult};
use crate::guard::path::normalize_lexically;
use crate::guard::policy::uses_allowed_name_chars;
use crate::guard::{
    GuardChain, ValidationOutcome, ValidationRequest, check_file_size, check_not_sensitive,
    check_search_term, check_text_payload,
};
use crate::shell::Session;

/// Stats `path` and refuses files over the size limit before a full read.
fn ensure_readable_size(path: &Path) -> ShellResult<()> {
    let metadata = fs::metadata(path)?;
    check_file_size(metadata.len()).into_result()?;
    Ok(())
}

/// Refuses a target that is the session directory or the shell root.
fn check_not_session_dir(session: &Session, target: &Path) -> ValidationOutcome {
    if target == session.current_dir() || target == session.root() {
        ValidationOutcome::deny(
            ErrorKind::PathTraversal,
            "Access denied - Cannot operate on the current directory",
        )
    } else {
        ValidationOutcome::Allowed
    }
}

/// Last segment of a validated relative path
fn base_name(path: &str) -> &str {
    normalize_lexically(path).last().copied().unwrap_or("")
}

/// Creates a file when the name contains a `.`, a directory otherwise.
pub fn create_item(session: &Session, name: &str) -> ShellResult<String> {
    GuardChain::new()
        .request(ValidationRequest::Filename(name))
        .evaluate()
        .into_result()?;

    // Diagnostic only; the portable set does not affect the decision
    if !uses_allowed_name_chars(name) {
        debug!("Name {:?} uses characters outside the portable set", name);
    }

    let target = session.resolve(name);
    if name.contains('.') {
        File::create(&target)?;
        info!("Created file {}", target.display());
        Ok(format!("📄 File '{}' created.", name))
    } else {
        fs::create_dir(&target)?;
        info!("Created directory {}", target.display());
        Ok(format!("📁 Folder '{}' created.", name))
    }
}

/// Recursively removes a file or directory.
pub fn delete_item(session: &Session, name: &str) -> ShellResult<String> {
    let target = session.resolve(name);
    GuardChain::new()
        .request(ValidationRequest::Filename(name))
        .then(|| check_not_session_dir(session, &target))
        .then(|| check_not_sensitive(name))
        .evaluate()
        .into_result()?;

    let metadata = fs::symlink_metadata(&target)?;
    if metadata.is_dir() {
        fs::remove_dir_all(&target)?;
    } else {
        fs::remove_file(&target)?;
    }

    info!("Deleted {}", target.display());
    Ok(format!("🗑️ '{}' deleted.", name))
}

/// Moves or renames `src` to `dst`.
pub fn move_item(session: &Session, src: &str, dst: &str) -> ShellResult<String> {
    let from = session.resolve(src);
    let to = session.resolve(dst);
    GuardChain::new()
        .request(ValidationRequest::Path(src))
        .then(|| check_not_session_dir(session, &from))
        .request(ValidationRequest::Path(dst))
        .request(ValidationRequest::Filename(base_name(dst)))
        .evaluate()
        .into_result()?;

    fs::rename(&from, &to)?;

    info!("Moved {} to {}", from.display(), to.display());
    Ok(format!("✅ Moved '{}' to '{}'", src, dst))
}

/// Copies a single file after checking its size.
pub fn copy_file(session: &Session, src: &str, dst: &str) -> ShellResult<String> {
    GuardChain::new()
        .request(ValidationRequest::Path(src))
        .request(ValidationRequest::Path(dst))
        .request(ValidationRequest::Filename(base_name(dst)))
        .evaluate()
        .into_result()?;

    let from = session.resolve(src);
    let to = session.resolve(dst);
    ensure_readable_size(&from)?;

    let data = fs::read(&from)?;
    fs::write(&to, &data)?;

    info!("Copied {} to {} ({} bytes)", from.display(), to.display(), data.len());
    Ok(format!("✅ Copied '{}' to '{}' ({} bytes)", src, dst, data.len()))
}

/// Name used by [`duplicate_file`]: `report.txt` becomes `report_copy.txt`.
pub fn duplicate_name(name: &str) -> String {
    match name.rfind('.') {
        Some(idx) if idx > 0 => format!("{}_copy{}", &name[..idx], &name[idx..]),
        _ => format!("{}_copy", name),
    }
}

/// Copies `name` next to itself with a `_copy` suffix.
pub fn duplicate_file(session: &Session, name: &str) -> ShellResult<String> {
    check_filename_only(name)?;

    let source = session.resolve(name);
    ensure_readable_size(&source)?;

    let new_name = duplicate_name(name);
    check_filename_only(&new_name)?;

    let data = fs::read(&source)?;
    let target = session.resolve(&new_name);
    fs::write(&target, data)?;

    info!("Duplicated {} as {}", source.display(), target.display());
    Ok(format!("✅ File duplicated as '{}'", new_name))
}

/// Appends `text` and a newline to `name`, creating it if needed.
pub fn echo_to_file(
    session: &Session,
    text: &str,
    name: &str,
    max_length: usize,
) -> ShellResult<String> {
    GuardChain::new()
        .request(ValidationRequest::Filename(name))
        .then(|| check_text_payload(text, max_length))
        .evaluate()
        .into_result()?;

    let target = session.resolve(name);
    let mut file = OpenOptions::new().create(true).append(true).open(&target)?;
    writeln!(file, "{}", text)?;

    info!("Appended {} bytes to {}", text.len() + 1, target.display());
    Ok(format!("✅ Text written to '{}'", name))
}

/// Creates `name` as an empty file, truncating any existing content.
pub fn create_empty_file(session: &Session, name: &str) -> ShellResult<String> {
    check_filename_only(name)?;

    let target = session.resolve(name);
    File::create(&target)?;

    info!("Created empty file {}", target.display());
    Ok(format!("📄 Empty file '{}' created (0 bytes)", name))
}

pub fn create_directory(session: &Session, name: &str) -> ShellResult<String> {
    check_filename_only(name)?;

    let target = session.resolve(name);
    fs::create_dir(&target)?;

    info!("Created directory {}", target.display());
    Ok(format!("📁 Directory '{}' created", name))
}

/// Creates `name` if missing, otherwise bumps its modification time.
pub fn touch_file(session: &Session, name: &str) -> ShellResult<String> {
    check_filename_only(name)?;

    let target = session.resolve(name);
    if !target.exists() {
        File::create(&target)?;
        info!("Touched new file {}", target.display());
        return Ok(format!("✅ File '{}' created (touched)", name));
    }

    let file = OpenOptions::new().write(true).open(&target)?;
    file.set_modified(SystemTime::now())?;

    info!("Updated timestamp of {}", target.display());
    Ok(format!("✅ File '{}' timestamp updated", name))
}

/// Replaces every literal occurrence of `old` with `new` in `name`.
pub fn replace_in_file(session: &Session, old: &str, new: &str, name: &str) -> ShellResult<String> {
    GuardChain::new()
        .then(|| check_search_term(old))
        .request(ValidationRequest::Filename(name))
        .evaluate()
        .into_result()?;

    let target = session.resolve(name);
    ensure_readable_size(&target)?;

    let content = fs::read_to_string(&target)?;
    let occurrences = content.matches(old).count();
    fs::write(&target, content.replace(old, new))?;

    info!("Replaced {} occurrence(s) in {}", occurrences, target.display());
    Ok(format!(
        "✅ Replaced '{}' with '{}' in '{}' ({} occurrence(s))",
        old, new, name, occurrences
    ))
}

fn check_filename_only(name: &str) -> ShellResult<()> {
    GuardChain::new()
        .request(ValidationRequest::Filename(name))
        .evaluate()
        .into_result()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, ShellError};
    use tempfile::TempDir;

    fn session() -> (TempDir, Session) {
        let dir = tempfile::tempdir().unwrap();
        let session = Session::new(dir.path());
        (dir, session)
    }

    fn denial_kind(result: ShellResult<String>) -> ErrorKind {
        match result {
            Err(ShellError::Denied(d)) => d.kind,
            other => panic!("expected denial, got {:?}", other),
        }
    }

    #[test]
    fn test_create_file_or_folder() {
        let (dir, session) = session();
        create_item(&session, "notes.txt").unwrap();
        create_item(&session, "build").unwrap();
        assert!(dir.path().join("notes.txt").is_file());
        assert!(dir.path().join("build").is_dir());
    }

    #[test]
    fn test_create_rejects_nested_name() {
        let (dir, session) = session();
        assert_eq!(
            denial_kind(create_item(&session, "a/b.txt")),
            ErrorKind::IllegalCharacter
        );
        assert!(!dir.path().join("a").exists());
    }

    #[test]
    fn test_delete_recursive() {
        let (dir, session) = session();
        fs::create_dir_all(dir.path().join("tree/inner")).unwrap();
        fs::write(dir.path().join("tree/inner/f.txt"), "x").unwrap();

        delete_item(&session, "tree").unwrap();
        assert!(!dir.path().join("tree").exists());
    }

    #[test]
    fn test_delete_sensitive_name_refused() {
        let (dir, session) = session();
        fs::create_dir(dir.path().join(".ssh")).unwrap();

        assert_eq!(
            denial_kind(delete_item(&session, ".ssh")),
            ErrorKind::SensitivePathDenied
        );
        assert!(dir.path().join(".ssh").exists());
    }

    #[test]
    fn test_delete_current_directory_refused() {
        let (dir, mut session) = session();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/keep.txt"), "x").unwrap();

        assert_eq!(denial_kind(delete_item(&session, ".")), ErrorKind::PathTraversal);

        session.set_current_dir(dir.path().join("sub"));
        assert_eq!(denial_kind(delete_item(&session, ".")), ErrorKind::PathTraversal);
        assert!(dir.path().join("sub/keep.txt").exists());
    }

    #[test]
    fn test_move_current_directory_refused() {
        let (dir, session) = session();
        assert_eq!(
            denial_kind(move_item(&session, ".", "elsewhere")),
            ErrorKind::PathTraversal
        );
        assert!(dir.path().exists());
        assert!(!dir.path().join("elsewhere").exists());
    }

    #[test]
    fn test_oversized_file_refused_before_read() {
        let (dir, session) = session();
        let big = File::create(dir.path().join("big.bin")).unwrap();
        big.set_len(crate::guard::policy::MAX_FILE_SIZE + 1).unwrap();

        assert_eq!(
            denial_kind(copy_file(&session, "big.bin", "copy.bin")),
            ErrorKind::SizeLimitExceeded
        );
        assert_eq!(
            denial_kind(duplicate_file(&session, "big.bin")),
            ErrorKind::SizeLimitExceeded
        );
        assert_eq!(
            denial_kind(replace_in_file(&session, "a", "b", "big.bin")),
            ErrorKind::SizeLimitExceeded
        );
        assert!(!dir.path().join("copy.bin").exists());
        assert!(!dir.path().join("big_copy.bin").exists());
    }

    #[test]
    fn test_move_into_subdirectory() {
        let (dir, session) = session();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        move_item(&session, "a.txt", "sub/b.txt").unwrap();
        assert!(dir.path().join("sub/b.txt").is_file());
        assert!(!dir.path().join("a.txt").exists());
    }

    #[test]
    fn test_move_out_of_tree_refused() {
        let (dir, session) = session();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        assert_eq!(
            denial_kind(move_item(&session, "a.txt", "../a.txt")),
            ErrorKind::PathTraversal
        );
        assert_eq!(
            denial_kind(move_item(&session, "a.txt", "/tmp/a.txt")),
            ErrorKind::AbsolutePathRejected
        );
        assert!(dir.path().join("a.txt").exists());
    }

    #[test]
    fn test_copy_file() {
        let (dir, session) = session();
        fs::write(dir.path().join("src.txt"), "hello").unwrap();

        let msg = copy_file(&session, "src.txt", "dst.txt").unwrap();
        assert!(msg.contains("5 bytes"));
        assert_eq!(fs::read_to_string(dir.path().join("dst.txt")).unwrap(), "hello");
    }

    #[test]
    fn test_copy_missing_source_is_io_error() {
        let (_dir, session) = session();
        assert!(matches!(
            copy_file(&session, "nope.txt", "dst.txt"),
            Err(ShellError::IoError(_))
        ));
    }

    #[test]
    fn test_duplicate_name() {
        assert_eq!(duplicate_name("report.txt"), "report_copy.txt");
        assert_eq!(duplicate_name("archive.tar.gz"), "archive.tar_copy.gz");
        assert_eq!(duplicate_name("Makefile"), "Makefile_copy");
        assert_eq!(duplicate_name(".env"), ".env_copy");
    }

    #[test]
    fn test_duplicate_file() {
        let (dir, session) = session();
        fs::write(dir.path().join("r.md"), "body").unwrap();

        duplicate_file(&session, "r.md").unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("r_copy.md")).unwrap(), "body");
    }

    #[test]
    fn test_echo_appends_lines() {
        let (dir, session) = session();
        echo_to_file(&session, "one", "log.txt", 100).unwrap();
        echo_to_file(&session, "two words", "log.txt", 100).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("log.txt")).unwrap(),
            "one\ntwo words\n"
        );
    }

    #[test]
    fn test_echo_text_limit() {
        let (dir, session) = session();
        assert_eq!(
            denial_kind(echo_to_file(&session, "abcdef", "log.txt", 5)),
            ErrorKind::TooLong
        );
        assert!(!dir.path().join("log.txt").exists());
    }

    #[test]
    fn test_empty_mkdir_touch() {
        let (dir, session) = session();
        fs::write(dir.path().join("full.txt"), "data").unwrap();

        create_empty_file(&session, "full.txt").unwrap();
        assert_eq!(fs::metadata(dir.path().join("full.txt")).unwrap().len(), 0);

        create_directory(&session, "docs").unwrap();
        assert!(dir.path().join("docs").is_dir());

        let created = touch_file(&session, "new.txt").unwrap();
        assert!(created.contains("created"));
        let updated = touch_file(&session, "new.txt").unwrap();
        assert!(updated.contains("timestamp updated"));
    }

    #[test]
    fn test_replace_in_file() {
        let (dir, session) = session();
        fs::write(dir.path().join("t.txt"), "cat dog cat").unwrap();

        let msg = replace_in_file(&session, "cat", "fox", "t.txt").unwrap();
        assert!(msg.contains("2 occurrence(s)"));
        assert_eq!(fs::read_to_string(dir.path().join("t.txt")).unwrap(), "fox dog fox");
    }

    #[test]
    fn test_replace_empty_pattern_refused() {
        let (_dir, session) = session();
        assert_eq!(
            denial_kind(replace_in_file(&session, " ", "x", "t.txt")),
            ErrorKind::EmptyInput
        );
    }
}
