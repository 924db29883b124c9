//! Input validation guards
//!
//! Pure decision functions standing between user text and filesystem
//! actions. Each returns a [`ValidationOutcome`]; callers abort on a denial
//! and surface its message. Guards for one argument are combined with a
//! [`GuardChain`] so a later guard never runs after an earlier denial.

pub mod chain;
pub mod command;
pub mod filename;
pub mod outcome;
pub mod path;
pub mod policy;
pub mod search;
pub mod sensitive;
pub mod size;

pub use chain::GuardChain;
pub use command::{check_command, check_command_rate_limited};
pub use filename::check_filename;
pub use outcome::{ValidationOutcome, ValidationRequest};
pub use path::check_path;
pub use search::{check_search_term, check_text_payload};
pub use sensitive::{check_not_sensitive, is_sensitive_path};
pub use size::check_file_size;
