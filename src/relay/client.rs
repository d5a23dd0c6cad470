// src/relay/client.rs
use crate::relay::RelayError;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::io::Read;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Used when upstream doesn't say what it sent.
pub const FALLBACK_CONTENT_TYPE: &str = "image/jpeg";

/// Largest upstream body relayed, in bytes.
pub const MAX_IMAGE_BYTES: u64 = 2 * 1024 * 1024;

/// Bytes fetched on behalf of the page, with the type upstream reported.
#[derive(Debug)]
pub struct RelayedImage {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Fetches remote avatar images so the browser can load them same-origin.
#[derive(Clone)]
pub struct ImageRelay {
    client: Client,
    max_bytes: u64,
}

impl ImageRelay {
    pub fn new(timeout: Duration) -> Result<Self, RelayError> {
        Self::with_limit(timeout, MAX_IMAGE_BYTES)
    }

    pub fn with_limit(timeout: Duration, max_bytes: u64) -> Result<Self, RelayError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| RelayError::Client(e.to_string()))?;

        Ok(Self { client, max_bytes })
    }

    /// Fetch `url` once. No retries; the page swaps in a placeholder when
    /// this fails.
    pub fn fetch(&self, url: &str) -> Result<RelayedImage, RelayError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            // Passed through as-is, same as any other body.
            warn!(%status, url, "upstream image returned non-success status");
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .unwrap_or(FALLBACK_CONTENT_TYPE)
            .to_string();

        let mut bytes = Vec::new();
        Read::take(resp, self.max_bytes + 1)
            .read_to_end(&mut bytes)
            .map_err(|e| RelayError::Body(e.to_string()))?;

        if bytes.len() as u64 > self.max_bytes {
            warn!(url, limit = self.max_bytes, "upstream image too large");
            return Err(RelayError::Body(format!(
                "image larger than {} bytes",
                self.max_bytes
            )));
        }

        debug!(url, %content_type, len = bytes.len(), "relayed image");

        Ok(RelayedImage {
            content_type,
            bytes,
        })
    }
}
