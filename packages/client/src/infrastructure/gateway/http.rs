//! reqwest-backed availability gateway.

use async_trait::async_trait;

use crate::{
    domain::{AvailabilityGateway, AvailabilityRequest, AvailabilityResponse, GatewayError},
    infrastructure::dto::http::{AvailabilityRequestDto, AvailabilityResponseDto},
};

/// Path of the availability endpoint, relative to the site root
pub const CHECK_AVAILABILITY_PATH: &str = "/api/check-availability/";

/// Header carrying the anti-forgery token
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Calls `POST {base_url}/api/check-availability/` with a JSON body.
///
/// The body is parsed as JSON whatever the status code; the endpoint reports
/// failures in the same `{available, message}` shape.
pub struct HttpAvailabilityGateway {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAvailabilityGateway {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            endpoint: format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                CHECK_AVAILABILITY_PATH
            ),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AvailabilityGateway for HttpAvailabilityGateway {
    async fn check(
        &self,
        request: AvailabilityRequest,
        csrf_token: Option<String>,
    ) -> Result<AvailabilityResponse, GatewayError> {
        let body = AvailabilityRequestDto::from(&request);

        let mut builder = self.client.post(&self.endpoint).json(&body);
        if let Some(token) = csrf_token {
            builder = builder.header(CSRF_HEADER, token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Availability endpoint answered with status {}", status);
        }

        let text = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let dto: AvailabilityResponseDto =
            serde_json::from_str(&text).map_err(|e| GatewayError::Decode(e.to_string()))?;

        Ok(dto.into())
    }
}
