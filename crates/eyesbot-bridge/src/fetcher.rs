//! Upstream fetching with failure classification.

use std::time::Duration;

use bytes::Bytes;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::BridgeError;

/// How the response body should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyMode {
    Text,
    Binary,
}

/// A single upstream GET, built per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamRequest {
    pub url: String,
    pub mode: BodyMode,
}

impl UpstreamRequest {
    pub fn text(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: BodyMode::Text,
        }
    }

    pub fn binary(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: BodyMode::Binary,
        }
    }
}

/// Response body, or the empty fallback for a failed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Binary(Bytes),
}

impl Payload {
    /// The fallback returned when a fetch fails.
    pub fn empty(mode: BodyMode) -> Self {
        match mode {
            BodyMode::Text => Payload::Text(String::new()),
            BodyMode::Binary => Payload::Binary(Bytes::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Payload::Text(text) => text.is_empty(),
            Payload::Binary(bytes) => bytes.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Payload::Text(text) => text.len(),
            Payload::Binary(bytes) => bytes.len(),
        }
    }

    /// Text contents. A binary payload is decoded lossily.
    pub fn into_text(self) -> String {
        match self {
            Payload::Text(text) => text,
            Payload::Binary(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// Raw bytes.
    pub fn into_bytes(self) -> Bytes {
        match self {
            Payload::Text(text) => Bytes::from(text),
            Payload::Binary(bytes) => bytes,
        }
    }
}

/// Classification of a failed upstream fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    HttpStatus,
    Connection,
    Timeout,
    Request,
}

impl FetchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchErrorKind::HttpStatus => "http_status",
            FetchErrorKind::Connection => "connection",
            FetchErrorKind::Timeout => "timeout",
            FetchErrorKind::Request => "request",
        }
    }
}

impl std::fmt::Display for FetchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failed upstream fetch. Only used for diagnostics; callers of
/// [`Fetcher::fetch`] never see it.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::HttpStatus { .. } => FetchErrorKind::HttpStatus,
            FetchError::Connection(_) => FetchErrorKind::Connection,
            FetchError::Timeout(_) => FetchErrorKind::Timeout,
            FetchError::Request(_) => FetchErrorKind::Request,
        }
    }

    /// Sort a transport error into the fixed taxonomy.
    ///
    /// Connection failures win over timeouts, so a connect timeout is a
    /// connection error.
    fn classify(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            let url = err.url().map(|u| u.to_string()).unwrap_or_default();
            return FetchError::HttpStatus {
                status: status.as_u16(),
                url,
            };
        }
        if err.is_connect() {
            FetchError::Connection(err.to_string())
        } else if err.is_timeout() {
            FetchError::Timeout(err.to_string())
        } else {
            FetchError::Request(err.to_string())
        }
    }
}

/// Performs single GET requests against the robot API.
///
/// Idle connections are never pooled, so each call opens its own
/// connection and calls share no state.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a fetcher. `timeout` of `None` keeps the client default.
    pub fn new(timeout: Option<Duration>) -> Result<Self, BridgeError> {
        let mut builder = Client::builder()
            .user_agent(concat!("eyesbot-mcp/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(0);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| BridgeError::Client(e.to_string()))?;
        Ok(Self { client })
    }

    /// Fetch `url`, degrading every failure to the empty payload.
    pub async fn fetch(&self, url: &str, mode: BodyMode) -> Payload {
        let request = UpstreamRequest {
            url: url.to_string(),
            mode,
        };
        match self.try_fetch(&request).await {
            Ok(payload) => payload,
            Err(err) => {
                warn!(url = %request.url, kind = %err.kind(), "Upstream fetch failed: {}", err);
                Payload::empty(mode)
            }
        }
    }

    /// Fetch once and report the failure instead of absorbing it.
    pub async fn try_fetch(&self, request: &UpstreamRequest) -> Result<Payload, FetchError> {
        debug!("GET {} ({:?})", request.url, request.mode);

        let response = self
            .client
            .get(&request.url)
            .send()
            .await
            .map_err(FetchError::classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: request.url.clone(),
            });
        }

        let payload = match request.mode {
            BodyMode::Text => Payload::Text(response.text().await.map_err(FetchError::classify)?),
            BodyMode::Binary => {
                Payload::Binary(response.bytes().await.map_err(FetchError::classify)?)
            }
        };

        debug!("GET {} -> {} ({} bytes)", request.url, status, payload.len());
        Ok(payload)
    }
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod tests;
