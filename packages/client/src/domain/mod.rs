//! Domain layer for the booking form.
//!
//! This module contains business rules that are independent of
//! wire formats (DTOs), HTTP, and the page that hosts the form.

pub mod availability;
pub mod entity;
pub mod error;
pub mod factory;
pub mod gateway;
pub mod price;
pub mod value_object;

pub use availability::{AvailabilityRequest, AvailabilityResponse};
pub use entity::{Notice, NoticeLevel};
pub use error::{GatewayError, ValueObjectError};
pub use factory::NoticeIdFactory;
pub use gateway::{AvailabilityGateway, CookieSource};
pub use price::PriceQuote;
pub use value_object::{
    AttendeeCount, BookingDateTime, HallCapacity, HallId, HourlyRate, NoticeId, TimeRange,
    Timestamp,
};
