//! Error handling
//!
//! Defines error types and handling for the shell.

pub mod handlers;
pub mod types;

pub use types::*;
