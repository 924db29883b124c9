//! Output formatting helpers shared by the actions

use std::fs::Metadata;

const UNIT: u64 = 1024;

/// Human-readable size: bytes below 1 KiB, then KB / MB / GB with two decimals
pub fn human_size(bytes: u64) -> String {
    let size = bytes as f64;
    if bytes < UNIT {
        format!("{} B", bytes)
    } else if bytes < UNIT * UNIT {
        format!("{:.2} KB", size / UNIT as f64)
    } else if bytes < UNIT * UNIT * UNIT {
        format!("{:.2} MB", size / (UNIT * UNIT) as f64)
    } else {
        format!("{:.2} GB", size / (UNIT * UNIT * UNIT) as f64)
    }
}

/// `ls -l` style mode string, e.g. `drwxr-xr-x`
#[cfg(unix)]
pub fn format_mode(metadata: &Metadata) -> String {
    use std::os::unix::fs::PermissionsExt;

    let mode = metadata.permissions().mode();
    let kind = if metadata.is_dir() {
        'd'
    } else if metadata.file_type().is_symlink() {
        'l'
    } else {
        '-'
    };

    let mut out = String::with_capacity(10);
    out.push(kind);
    for shift in [6, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

#[cfg(not(unix))]
pub fn format_mode(metadata: &Metadata) -> String {
    let kind = if metadata.is_dir() { 'd' } else { '-' };
    let write = if metadata.permissions().readonly() { '-' } else { 'w' };
    format!("{kind}r{write}-------")
}
