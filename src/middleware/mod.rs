//! Shell middleware
//!
//! Provides logging and rate limiting around command dispatch.

pub mod logging;
pub mod rate_limit;
