//! Policy constants
//!
//! Compiled-in limits shared by every guard. None of these are read from the
//! runtime configuration.

/// Windows MAX_PATH, applied on every platform
pub const MAX_PATH_LENGTH: usize = 260;

pub const MAX_FILENAME_LENGTH: usize = 255;

/// 512 MiB
pub const MAX_FILE_SIZE: u64 = 512 * 1024 * 1024;

pub const MAX_SEARCH_TERM_LENGTH: usize = 1000;

pub const MAX_COMMAND_LENGTH: usize = 50;

pub const MAX_ARGUMENT_COUNT: usize = 10;

/// Portable name characters. Informational only: no guard rejects a name
/// for falling outside this set, `gx` merely logs it at debug level.
pub const ALLOWED_NAME_CHARS: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789._-@+= ()";

/// Characters that would be dangerous if a name were ever interpolated into a shell
pub const SHELL_METACHARACTERS: &[char] = &[';', '|', '&', '$', '(', ')', '>', '<', '`', '\\'];

/// Lowercase fragments matched as substrings before destructive operations
pub const SENSITIVE_PATH_FRAGMENTS: &[&str] = &[
    "system",
    "system32",
    "windows",
    "winnt",
    "boot.ini",
    "autoexec.bat",
    "config.sys",
    "/etc/",
    "/bin/",
    "/sbin/",
    "/usr/",
    "/var/",
    ".bashrc",
    ".bash_profile",
    ".ssh",
];

/// Returns true when every character of `name` is in [`ALLOWED_NAME_CHARS`].
/// Not part of any allow/deny decision.
pub fn uses_allowed_name_chars(name: &str) -> bool {
    name.chars().all(|c| ALLOWED_NAME_CHARS.contains(c))
}
