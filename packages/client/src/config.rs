//! Client configuration.
//!
//! ## Environment Variables
//!
//! - `HALLBOOK_BASE_URL`: site root of the booking application (default: "http://127.0.0.1:8000")
//! - `HALLBOOK_TIMEOUT_SECS`: availability request timeout in seconds (default: 10)
//! - `HALLBOOK_CSRF_COOKIE`: name of the anti-forgery cookie (default: "csrftoken")
//! - `HALLBOOK_LOCALE`: language of visitor-facing texts, "ar" or "en" (default: "ar")
//! - `HALLBOOK_SEARCH_DEBOUNCE_MS`: quiet interval before a search is submitted (default: 500)

use std::time::Duration;

use thiserror::Error;

use crate::{
    ui::{Locale, notice::DEFAULT_NOTICE_TTL, search::DEFAULT_SEARCH_DEBOUNCE},
    usecase::{DEFAULT_CSRF_COOKIE, DEFAULT_TIMEOUT},
};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Configuration for the booking client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Site root; the availability path is appended to it
    pub base_url: String,
    /// Upper bound on one availability request
    pub timeout: Duration,
    pub csrf_cookie: String,
    /// How long a notice stays visible
    pub notice_ttl: Duration,
    /// Quiet interval before a typed search is submitted
    pub search_debounce: Duration,
    pub locale: Locale,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            csrf_cookie: DEFAULT_CSRF_COOKIE.to_string(),
            notice_ttl: DEFAULT_NOTICE_TTL,
            search_debounce: DEFAULT_SEARCH_DEBOUNCE,
            locale: Locale::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(base_url) = lookup("HALLBOOK_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(raw) = lookup("HALLBOOK_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    key: "HALLBOOK_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(cookie) = lookup("HALLBOOK_CSRF_COOKIE") {
            config.csrf_cookie = cookie;
        }
        if let Some(raw) = lookup("HALLBOOK_SEARCH_DEBOUNCE_MS") {
            let millis = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "HALLBOOK_SEARCH_DEBOUNCE_MS",
                    value: raw.clone(),
                })?;
            config.search_debounce = Duration::from_millis(millis);
        }
        if let Some(raw) = lookup("HALLBOOK_LOCALE") {
            config.locale = raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "HALLBOOK_LOCALE",
                value: raw.clone(),
            })?;
        }

        Ok(config)
    }
}
