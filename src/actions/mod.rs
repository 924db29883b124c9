//! Filesystem actions
//!
//! Thin wrappers over `std::fs` that run their guards before any OS call and
//! return the text shown to the user.

pub mod files;
pub mod format;
pub mod navigate;
pub mod system;
pub mod view;
