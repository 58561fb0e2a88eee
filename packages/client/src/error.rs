//! Top-level error of the CLI client.

use thiserror::Error;

use crate::{config::ConfigError, ui::messages::UnknownLocale, usecase::CheckAvailabilityError};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Locale(#[from] UnknownLocale),

    #[error("availability check did not complete: {0}")]
    Availability(#[from] CheckAvailabilityError),

    #[error("availability check already in flight")]
    Busy,

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
