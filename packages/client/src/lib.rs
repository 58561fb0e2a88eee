//! Hall booking form core.
//!
//! Availability checks against the booking site's endpoint, live price
//! estimates, and advisory validation for the booking form, plus a small
//! CLI that drives them.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use cli::{Cli, run_client};
pub use config::ClientConfig;
pub use error::ClientError;
