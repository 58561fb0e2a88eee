//! Outbound ports of the domain.
//!
//! The booking core reaches the availability endpoint and the cookie store only
//! through these traits; `infrastructure` provides the concrete adapters.

use async_trait::async_trait;

use super::{AvailabilityRequest, AvailabilityResponse, GatewayError};

/// Asks the external availability service whether a hall is free.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvailabilityGateway: Send + Sync {
    /// Send one availability request.
    ///
    /// `csrf_token` is forwarded as the anti-forgery header when present.
    async fn check(
        &self,
        request: AvailabilityRequest,
        csrf_token: Option<String>,
    ) -> Result<AvailabilityResponse, GatewayError>;
}

/// Read access to the visitor's cookies.
#[cfg_attr(test, mockall::automock)]
pub trait CookieSource: Send + Sync {
    /// Decoded value of cookie `name`, if set.
    fn get(&self, name: &str) -> Option<String>;
}
