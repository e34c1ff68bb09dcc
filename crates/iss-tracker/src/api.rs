//! HTTP client for the open-notify ISS position API.
//!
//! One GET per call, no retry, no caching. Any transport error, non-2xx
//! status, or malformed body surfaces as an `ApiError`; the refresh loop
//! collapses these into a single user-visible failure message.

use crate::position::{IssNowResponse, Position};
use async_trait::async_trait;
use std::time::Duration;

/// Default open-notify endpoint for the current ISS position.
pub const DEFAULT_API_URL: &str = "http://api.open-notify.org/iss-now.json";

/// Per-request timeout so a stalled endpoint cannot wedge the refresh loop.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ── Errors ──────────────────────────────────────────────────────────

/// Errors from position API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status})")]
    Api { status: u16 },

    #[error("decode error: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

// ── Position source ─────────────────────────────────────────────────

/// Anything that can produce the current ISS position.
///
/// The refresh driver is generic over this so tests can drive it with a
/// canned source instead of the network.
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn fetch_position(&self) -> Result<Position>;
}

// ── Client ──────────────────────────────────────────────────────────

/// A minimal open-notify API client.
#[derive(Debug, Clone)]
pub struct IssClient {
    client: reqwest::Client,
    url: String,
}

impl IssClient {
    /// Create a client for the given endpoint URL.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl PositionSource for IssClient {
    /// Fetch the current ISS position.
    ///
    /// Checks the status before touching the body; a 2xx with a body that
    /// does not match the wire schema is a `Decode` error.
    async fn fetch_position(&self) -> Result<Position> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Api {
                status: status.as_u16(),
            });
        }

        // Decode by hand rather than via `Response::json` so the serde
        // message (e.g. which field was missing) survives into the
        // collapsed user-visible error.
        let body = response.bytes().await?;
        let body: IssNowResponse =
            serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))?;

        log::debug!(
            "fetched ISS position (api timestamp {}): ({}, {})",
            body.timestamp,
            body.iss_position.latitude,
            body.iss_position.longitude
        );

        Ok(body.position())
    }
}
