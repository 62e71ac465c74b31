//! Raw API Port - Object-safe HTTP boundary
//!
//! Typed request/response handling lives in the application services. This
//! port only moves JSON so it can be stored behind `Arc<dyn RawApiPort>` and
//! mocked in tests.

use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by the HTTP boundary
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connect refused, timeout, ...)
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON we expected
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The path could not be joined onto the base URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The HTTP client itself could not be configured
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

impl ApiError {
    pub fn parse(err: impl std::fmt::Display) -> Self {
        Self::Parse(err.to_string())
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RawApiPort: Send + Sync {
    /// `GET` a path (which may carry a query string) and return its JSON body.
    async fn get_json(&self, path: &str) -> Result<Value, ApiError>;

    /// `POST` a JSON body and return the JSON response.
    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    /// `POST` with no body and return the JSON response.
    async fn post_empty(&self, path: &str) -> Result<Value, ApiError>;
}
