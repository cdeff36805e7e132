//! The authenticated client handle.

use crate::config::ClientSettings;
use crate::transport::HttpTransport;
use crate::Result;

use super::builder::ElevenLabsClientBuilder;

/// Authenticated handle to the ElevenLabs API.
///
/// Construction is cheap and offline; every query opens (or reuses) a
/// connection on demand. Handles are immutable and meant to be shared behind
/// an `Arc`, usually through a [`super::ClientCache`].
pub struct ElevenLabsClient {
    pub(crate) transport: HttpTransport,
}

impl ElevenLabsClient {
    pub fn builder() -> ElevenLabsClientBuilder {
        ElevenLabsClientBuilder::new()
    }

    /// Build a client for `api_key` with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub(crate) fn from_parts(api_key: String, settings: &ClientSettings) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(api_key, settings)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    /// The configured key with everything but the last four characters masked.
    pub fn api_key_hint(&self) -> String {
        mask_key(self.transport.api_key())
    }

    /// True when this handle authenticates with `api_key`.
    pub fn uses_api_key(&self, api_key: &str) -> bool {
        self.transport.api_key() == api_key
    }
}

impl std::fmt::Debug for ElevenLabsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElevenLabsClient")
            .field("base_url", &self.base_url())
            .field("api_key", &self.api_key_hint())
            .finish()
    }
}

fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", "*".repeat(chars.len() - 4), tail)
}
