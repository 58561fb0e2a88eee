//! Shared utilities for Hallbook.
//!
//! Logging setup and clock abstractions used by the client crate.

pub mod logger;
pub mod time;

pub use time::{Clock, ManualClock, SystemClock};
