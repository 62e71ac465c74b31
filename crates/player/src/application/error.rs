//! Service layer error types
//!
//! Services convert these into safe defaults at their public boundary; the
//! typed error exists so the internal pipeline can use `?` and so the log
//! line says which stage failed.

use boardsync_domain::DomainError;
use thiserror::Error;

use crate::ports::outbound::ApiError;

#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    /// Transport-level failure talking to the server
    #[error("Request error: {0}")]
    Api(#[from] ApiError),

    /// Response JSON did not match the expected document
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Response parsed but violated a domain invariant
    #[error("Invalid response content: {0}")]
    Domain(#[from] DomainError),
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        ServiceError::Parse(err.to_string())
    }
}
