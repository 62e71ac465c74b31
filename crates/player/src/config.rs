//! Client configuration

use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use url::Url;

use crate::infrastructure::websocket::DEFAULT_RECONNECT_DELAY_MS;

pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Client configuration loaded from environment
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the game server's REST surface
    pub server_url: Url,
    /// Wait between a channel closing and the next connection attempt
    pub reconnect_delay: Duration,
    /// Per-request timeout for REST calls
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            reconnect_delay: Duration::from_millis(DEFAULT_RECONNECT_DELAY_MS),
            request_timeout: Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS),
        }
    }
}

fn default_server_url() -> Url {
    match Url::parse(DEFAULT_SERVER_URL) {
        Ok(url) => url,
        Err(e) => unreachable!("default server url is valid: {e}"),
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_url = lookup("BOARDSYNC_SERVER_URL")
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());
        let server_url = Url::parse(server_url.trim())
            .with_context(|| format!("BOARDSYNC_SERVER_URL is not a valid URL: {server_url}"))?;
        if !matches!(server_url.scheme(), "http" | "https") {
            bail!(
                "BOARDSYNC_SERVER_URL must use http or https, got {}",
                server_url.scheme()
            );
        }

        let reconnect_delay_ms = lookup("BOARDSYNC_RECONNECT_DELAY_MS")
            .unwrap_or_else(|| DEFAULT_RECONNECT_DELAY_MS.to_string())
            .trim()
            .parse::<u64>()
            .context("BOARDSYNC_RECONNECT_DELAY_MS must be a number of milliseconds")?;

        let request_timeout_ms = lookup("BOARDSYNC_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|| DEFAULT_REQUEST_TIMEOUT_MS.to_string())
            .trim()
            .parse::<u64>()
            .context("BOARDSYNC_REQUEST_TIMEOUT_MS must be a number of milliseconds")?;

        Ok(Self {
            server_url,
            reconnect_delay: Duration::from_millis(reconnect_delay_ms),
            request_timeout: Duration::from_millis(request_timeout_ms),
        })
    }

    /// Push-channel URL: same host as the server, `ws`/`wss` to match the
    /// `http`/`https` scheme, path `/ws`.
    pub fn ws_url(&self) -> Result<Url> {
        let mut url = self
            .server_url
            .join(boardsync_protocol::endpoints::WS)
            .context("failed to build push channel URL")?;
        let scheme = if self.server_url.scheme() == "https" {
            "wss"
        } else {
            "ws"
        };
        if url.set_scheme(scheme).is_err() {
            bail!("cannot derive a {scheme} URL from {}", self.server_url);
        }
        Ok(url)
    }
}
