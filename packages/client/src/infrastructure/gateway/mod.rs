//! Availability gateway implementations.

pub mod http;

pub use http::{CHECK_AVAILABILITY_PATH, CSRF_HEADER, HttpAvailabilityGateway};
