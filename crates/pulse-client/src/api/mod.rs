//! API client implementations
//!
//! `reqwest` implementations of the port traits defined in pulse-core.
//! One client serves every trait; each trait lives in its own module.

mod error;
mod event;
mod feedback;

use std::time::Duration;

use pulse_common::ApiConfig;
use pulse_core::error::DomainError;
use pulse_core::traits::ApiResult;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use self::error::{map_decode_error, map_status, map_transport_error};

/// Upper bound on connection setup, independent of the request timeout
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP implementation of `FeedbackApi` and `EventApi`
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    http: Client,
    base_url: Url,
}

impl HttpApiClient {
    /// Create a client from API configuration
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        Self::with_timeout(&config.base_url, config.timeout())
    }

    /// Create a client for a base URL with a per-request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let base_url = Url::parse(base_url).map_err(|e| {
            DomainError::ValidationError(format!("invalid API base URL {base_url:?}: {e}"))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::ValidationError(format!(
                "API base URL cannot carry paths: {base_url}"
            )));
        }

        let http = Client::builder()
            .user_agent(concat!("pulse-client/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(CONNECT_TIMEOUT.min(timeout))
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::InternalError(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Base URL requests are resolved against
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Send an authenticated request and return the raw body of a 2xx response
    async fn execute<F>(
        &self,
        request: RequestBuilder,
        token: &str,
        on_not_found: F,
    ) -> ApiResult<Vec<u8>>
    where
        F: FnOnce() -> DomainError + Send,
    {
        let response = request
            .bearer_auth(token)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?.to_vec();

        if status.is_success() {
            Ok(body)
        } else {
            Err(map_status(status, &body, on_not_found))
        }
    }

    /// Send an authenticated request and decode a JSON body
    async fn execute_json<T, F>(
        &self,
        request: RequestBuilder,
        token: &str,
        on_not_found: F,
    ) -> ApiResult<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> DomainError + Send,
    {
        let body = self.execute(request, token, on_not_found).await?;
        serde_json::from_slice(&body).map_err(map_decode_error)
    }
}

/// Check whether a response body carries nothing
fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}
