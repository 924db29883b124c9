//! GX Shell
//!
//! An interactive filesystem shell whose every action passes through the
//! input guards in [`guard`] before touching the filesystem.

pub mod actions;
pub mod config;
pub mod error;
pub mod guard;
pub mod middleware;
pub mod shell;

pub use config::ShellConfig;
pub use shell::{Session, Shell, run_shell};
