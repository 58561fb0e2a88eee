//! Core domain models for the booking form.

use serde::{Deserialize, Serialize};

use super::value_object::{NoticeId, Timestamp};

/// Severity of a notice. Each maps to an `alert-*` style on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Danger,
}

impl NoticeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Danger => "danger",
        }
    }

    /// Style class the page uses for this level, e.g. `alert-danger`.
    pub fn css_class(&self) -> String {
        format!("alert-{}", self.as_str())
    }
}

/// A transient, auto-dismissing message shown to the visitor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: NoticeId,
    pub level: NoticeLevel,
    pub message: String,
    /// Timestamp when the notice was posted
    pub posted_at: Timestamp,
}

impl Notice {
    pub fn new(id: NoticeId, level: NoticeLevel, message: String, posted_at: Timestamp) -> Self {
        Self {
            id,
            level,
            message,
            posted_at,
        }
    }

    /// Whether the notice has been visible for at least `ttl_millis` at `now`.
    pub fn is_expired(&self, now: Timestamp, ttl_millis: i64) -> bool {
        self.posted_at.elapsed_until(now) >= ttl_millis
    }
}
