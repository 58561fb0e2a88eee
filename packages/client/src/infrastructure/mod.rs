//! Infrastructure layer: adapters for the domain's outbound ports.

pub mod cookie;
pub mod dto;
pub mod gateway;

pub use cookie::CookieHeader;
pub use gateway::HttpAvailabilityGateway;
