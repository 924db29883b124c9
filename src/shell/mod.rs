//! Interactive shell
//!
//! Parsing, dispatch, session state and the REPL loop around the guards.

pub mod commands;
pub mod handlers;
pub mod help;
pub mod repl;
pub mod session;

pub use commands::{Command, CommandResult, CommandStatus};
pub use handlers::Shell;
pub use repl::run_shell;
pub use session::Session;
