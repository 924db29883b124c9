//! File viewing
//!
//! Read-only operations on bare file names in the session directory.

use chrono::{DateTime, Local};
use log::info;
use sha2::{Digest, Sha256};
use std::collections::VecDeque;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::actions::format::{format_mode, human_size};
use crate::error::ShellResult;
use crate::guard::{GuardChain, ValidationRequest, check_file_size, check_search_term};
use crate::shell::Session;

/// Validates a bare file name and resolves it against the session.
fn resolve_file(session: &Session, name: &str) -> ShellResult<PathBuf> {
    GuardChain::new()
        .request(ValidationRequest::Filename(name))
        .evaluate()
        .into_result()?;
    Ok(session.resolve(name))
}

/// Validates, resolves and size-checks a file that will be read whole.
fn resolve_whole_read(session: &Session, name: &str) -> ShellResult<PathBuf> {
    let path = resolve_file(session, name)?;
    check_file_size(fs::metadata(&path)?.len()).into_result()?;
    Ok(path)
}

/// Whole file contents between header and footer lines.
pub fn view_file(session: &Session, name: &str) -> ShellResult<String> {
    let path = resolve_whole_read(session, name)?;
    let data = fs::read(&path)?;

    let mut out = format!("\n--- {} ---\n", name);
    out.push_str(&String::from_utf8_lossy(&data));
    if !data.is_empty() && !data.ends_with(b"\n") {
        out.push('\n');
    }
    out.push_str(&format!("--- End of file ({} bytes) ---", data.len()));

    info!("Displayed {} ({} bytes)", path.display(), data.len());
    Ok(out)
}

/// First `lines` lines, streamed.
pub fn head_file(session: &Session, name: &str, lines: usize) -> ShellResult<String> {
    let path = resolve_file(session, name)?;
    let reader = BufReader::new(File::open(&path)?);

    let mut out = format!("\n--- First {} lines of {} ---\n", lines, name);
    let mut count = 0;
    for line in reader.lines().take(lines) {
        out.push_str(&line?);
        out.push('\n');
        count += 1;
    }

    if count == 0 {
        out.push_str("(file is empty)");
    } else if count < lines {
        out.push_str(&format!("--- End of file (only {} lines) ---", count));
    } else {
        out.push_str(&format!("--- End of head (showed {} lines) ---", lines));
    }
    Ok(out)
}

/// Last `lines` lines. The file is scanned once, keeping only a rolling tail.
pub fn tail_file(session: &Session, name: &str, lines: usize) -> ShellResult<String> {
    let path = resolve_whole_read(session, name)?;
    let reader = BufReader::new(File::open(&path)?);

    let mut tail: VecDeque<String> = VecDeque::with_capacity(lines);
    let mut total = 0;
    for line in reader.lines() {
        let line = line?;
        total += 1;
        if tail.len() == lines {
            tail.pop_front();
        }
        tail.push_back(line);
    }

    let mut out = format!("\n--- Last {} lines of {} ---\n", lines, name);
    for line in &tail {
        out.push_str(line);
        out.push('\n');
    }
    if total == 0 {
        out.push_str("(file is empty)");
    } else {
        out.push_str(&format!(
            "--- End of tail (showed {} of {} lines) ---",
            tail.len(),
            total
        ));
    }
    Ok(out)
}

/// Case-insensitive literal search, one output line per matching line.
pub fn grep_file(session: &Session, term: &str, name: &str) -> ShellResult<String> {
    GuardChain::new()
        .then(|| check_search_term(term))
        .request(ValidationRequest::Filename(name))
        .evaluate()
        .into_result()?;

    let path = session.resolve(name);
    let reader = BufReader::new(File::open(&path)?);
    let needle = term.to_lowercase();

    let mut out = format!("\n--- Searching for '{}' in {} ---\n", term, name);
    let mut found = 0;
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.to_lowercase().contains(&needle) {
            out.push_str(&format!("  Line {}: {}\n", idx + 1, line));
            found += 1;
        }
    }

    if found == 0 {
        out.push_str(&format!("No matches found for '{}'", term));
    } else {
        out.push_str(&format!("--- Found {} match(es) ---", found));
    }
    Ok(out)
}

pub fn file_stats(session: &Session, name: &str) -> ShellResult<String> {
    let path = resolve_file(session, name)?;
    let metadata = fs::metadata(&path)?;
    let modified: DateTime<Local> = metadata.modified()?.into();

    Ok([
        format!("\n=== File Statistics: {} ===", name),
        format!("📄 Name: {}", name),
        format!("📊 Size: {} bytes", metadata.len()),
        format!("🔒 Mode: {}", format_mode(&metadata)),
        format!("⏰ Modified: {}", modified.format("%Y-%m-%d %H:%M:%S %z")),
        format!("📁 Is Dir: {}", metadata.is_dir()),
        format!("💾 Size (readable): {}", human_size(metadata.len())),
    ]
    .join("\n"))
}

/// SHA-256 of the file contents, streamed through the hasher.
pub fn hash_file(session: &Session, name: &str) -> ShellResult<String> {
    let path = resolve_file(session, name)?;
    let mut file = File::open(&path)?;

    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;

    Ok(format!("SHA256({}) = {:x}", name, hasher.finalize()))
}

pub fn count_lines(session: &Session, name: &str) -> ShellResult<String> {
    let path = resolve_file(session, name)?;
    let reader = BufReader::new(File::open(&path)?);

    let mut lines = 0;
    for line in reader.lines() {
        line?;
        lines += 1;
    }
    Ok(format!("{}: {} lines", name, lines))
}
