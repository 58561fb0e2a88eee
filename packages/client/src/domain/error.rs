//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// HallId validation error
    #[error("HallId cannot be empty")]
    HallIdEmpty,

    /// Date-time input left blank
    #[error("Date-time cannot be empty")]
    DateTimeEmpty,

    /// Date-time input that is neither `datetime-local` nor RFC 3339
    #[error("Invalid date-time (got: {0})")]
    DateTimeInvalid(String),

    /// Time range whose end is not after its start
    #[error("End time must be after start time")]
    InvalidRange,

    /// Hourly rate below zero
    #[error("Hourly rate cannot be negative")]
    NegativeRate,

    /// Hourly rate that is not a decimal number
    #[error("Invalid hourly rate (got: {0})")]
    RateInvalid(String),

    /// Attendee count or capacity that is not a whole number
    #[error("Invalid count (got: {0})")]
    CountInvalid(String),
}

/// Errors raised by an availability gateway implementation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The request could not be sent or the body could not be read
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body was not the expected JSON document
    #[error("could not decode response: {0}")]
    Decode(String),
}
