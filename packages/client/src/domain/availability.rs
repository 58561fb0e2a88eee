//! Availability check request and response.

use super::{HallId, TimeRange};

/// One availability question: is `hall_id` free for `range`?
///
/// Built fresh for every submission and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityRequest {
    pub hall_id: HallId,
    pub range: TimeRange,
}

impl AvailabilityRequest {
    pub fn new(hall_id: HallId, range: TimeRange) -> Self {
        Self { hall_id, range }
    }
}

/// Answer from the availability endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityResponse {
    pub available: bool,
    /// Server-authored text shown to the visitor as-is
    pub message: String,
}
