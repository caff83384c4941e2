//! HTTP client helpers (REST).

use crate::core::config::health_url;
use crate::features::health::actions::{HealthFetchError, HealthSource};
use async_trait::async_trait;
use cyberitance_api_models::HealthResponse;
use gloo_net::http::Request;

/// REST client bound to one API origin.
#[derive(Clone, Debug)]
pub struct ApiClient {
    /// Origin prefixed onto every request path.
    pub base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait(?Send)]
impl HealthSource for ApiClient {
    async fn fetch_health(&self) -> Result<HealthResponse, HealthFetchError> {
        let response = Request::get(&health_url(&self.base_url))
            .send()
            .await
            .map_err(|err| HealthFetchError::Transport(err.to_string()))?;
        if !response.ok() {
            return Err(HealthFetchError::Status(response.status()));
        }
        response
            .json::<HealthResponse>()
            .await
            .map_err(|err| HealthFetchError::Transport(err.to_string()))
    }
}
