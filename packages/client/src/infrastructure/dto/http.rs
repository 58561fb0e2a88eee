//! HTTP request/response DTOs for the availability endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::{AvailabilityRequest, AvailabilityResponse};

/// Request body for `POST /api/check-availability/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRequestDto {
    pub hall_id: String,
    pub start_datetime: String, // ISO 8601, as entered
    pub end_datetime: String,   // ISO 8601, as entered
}

/// Response body of the availability endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResponseDto {
    pub available: bool,
    pub message: String,
}

impl From<&AvailabilityRequest> for AvailabilityRequestDto {
    fn from(request: &AvailabilityRequest) -> Self {
        Self {
            hall_id: request.hall_id.as_str().to_string(),
            start_datetime: request.range.start().as_submitted().to_string(),
            end_datetime: request.range.end().as_submitted().to_string(),
        }
    }
}

impl From<AvailabilityResponseDto> for AvailabilityResponse {
    fn from(dto: AvailabilityResponseDto) -> Self {
        Self {
            available: dto.available,
            message: dto.message,
        }
    }
}
