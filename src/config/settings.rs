//! Transport settings read from an [`EnvView`].

use super::EnvView;
use crate::{Error, ErrorContext, Result};
use std::time::Duration;

pub const BASE_URL_ENV: &str = "ELEVENLABS_BASE_URL";
pub const TIMEOUT_ENV: &str = "ELEVENLABS_TIMEOUT_SECS";
pub const PROXY_URL_ENV: &str = "ELEVENLABS_PROXY_URL";

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Non-secret settings used to build the HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub timeout: Duration,
    pub proxy_url: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            proxy_url: None,
        }
    }
}

impl ClientSettings {
    /// Read settings from `env`, falling back to defaults for unset or empty
    /// variables.
    pub fn from_env(env: &EnvView) -> Result<Self> {
        let mut settings = Self::default();
        if let Some(url) = env.get_non_empty(BASE_URL_ENV) {
            settings.base_url = normalize_base_url(url, BASE_URL_ENV)?;
        }
        if let Some(raw) = env.get_non_empty(TIMEOUT_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| {
                    Error::configuration_with_context(
                        "timeout must be a positive number of seconds",
                        ErrorContext::new()
                            .with_field_path(TIMEOUT_ENV)
                            .with_details(format!("got {:?}", raw))
                            .with_source("config"),
                    )
                })?;
            settings.timeout = Duration::from_secs(secs);
        }
        if let Some(proxy) = env.get_non_empty(PROXY_URL_ENV) {
            settings.proxy_url = Some(proxy.to_string());
        }
        Ok(settings)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_proxy_url(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }
}

/// Validate an API root and strip trailing slashes so paths can be appended.
pub(crate) fn normalize_base_url(raw: &str, field: &str) -> Result<String> {
    let parsed = url::Url::parse(raw.trim()).map_err(|e| {
        Error::configuration_with_context(
            format!("invalid base URL: {}", e),
            ErrorContext::new()
                .with_field_path(field)
                .with_details(format!("got {:?}", raw))
                .with_source("config"),
        )
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            format!("unsupported URL scheme '{}'", parsed.scheme()),
            ErrorContext::new()
                .with_field_path(field)
                .with_source("config"),
        ));
    }
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
