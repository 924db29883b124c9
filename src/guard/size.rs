//! Size guard
//!
//! Evaluated from a metadata stat before any whole-file read.

use crate::error::ErrorKind;
use crate::guard::outcome::ValidationOutcome;
use crate::guard::policy::MAX_FILE_SIZE;

pub fn check_file_size(bytes: u64) -> ValidationOutcome {
    if bytes > MAX_FILE_SIZE {
        return ValidationOutcome::deny(
            ErrorKind::SizeLimitExceeded,
            format!(
                "File size exceeds maximum allowed ({} MB)",
                MAX_FILE_SIZE / (1024 * 1024)
            ),
        );
    }
    ValidationOutcome::Allowed
}
