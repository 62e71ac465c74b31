//! reqwest-backed implementation of `RawApiPort`

use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

use crate::ports::outbound::{ApiError, RawApiPort};

/// HTTP adapter for the game server's REST endpoints
#[derive(Clone)]
pub struct ApiAdapter {
    client: Client,
    base_url: Url,
}

impl ApiAdapter {
    /// Build an adapter whose every request is bounded by `timeout`.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", path, e)))
    }

    async fn read_json(response: Response) -> Result<Value, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response.json::<Value>().await.map_err(ApiError::parse)
    }
}

fn request_failed(err: reqwest::Error) -> ApiError {
    ApiError::RequestFailed(err.to_string())
}

#[async_trait::async_trait]
impl RawApiPort for ApiAdapter {
    async fn get_json(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path)?;
        tracing::trace!(%url, "GET");
        let response = self.client.get(url).send().await.map_err(request_failed)?;
        Self::read_json(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        let url = self.url(path)?;
        tracing::trace!(%url, "POST");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(request_failed)?;
        Self::read_json(response).await
    }

    async fn post_empty(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path)?;
        tracing::trace!(%url, "POST");
        let response = self.client.post(url).send().await.map_err(request_failed)?;
        Self::read_json(response).await
    }
}
