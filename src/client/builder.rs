use crate::client::core::ElevenLabsClient;
use crate::config::{normalize_base_url, ClientSettings, EnvView};
use crate::{Error, ErrorContext, Result};
use std::time::Duration;

/// Builder for [`ElevenLabsClient`].
///
/// The key is taken as given; use [`crate::config::resolve_api_key`] or a
/// [`super::ClientCache`] when it should come from the environment.
pub struct ElevenLabsClientBuilder {
    api_key: Option<String>,
    settings: ClientSettings,
}

impl ElevenLabsClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            settings: ClientSettings::default(),
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Replace all transport settings at once.
    pub fn settings(mut self, settings: ClientSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Read transport settings from an environment view.
    pub fn settings_from_env(mut self, env: &EnvView) -> Result<Self> {
        self.settings = ClientSettings::from_env(env)?;
        Ok(self)
    }

    /// Override the API root (primarily for testing with mock servers).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.settings.base_url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = timeout;
        self
    }

    pub fn proxy_url(mut self, url: impl Into<String>) -> Self {
        self.settings.proxy_url = Some(url.into());
        self
    }

    pub fn build(self) -> Result<ElevenLabsClient> {
        let api_key = self.api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
            Error::configuration_with_context(
                "API key required",
                ErrorContext::new()
                    .with_field_path("api_key")
                    .with_source("client_builder"),
            )
        })?;
        let mut settings = self.settings;
        settings.base_url = normalize_base_url(&settings.base_url, "base_url")?;
        ElevenLabsClient::from_parts(api_key, &settings)
    }
}

impl Default for ElevenLabsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_requires_key() {
        let err = ElevenLabsClientBuilder::new().build().unwrap_err();
        assert!(err.is_configuration());

        let err = ElevenLabsClientBuilder::new().api_key("").build().unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = ElevenLabsClient::builder()
            .api_key("sk-test")
            .base_url("http://localhost:4010/")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:4010");
    }

    #[test]
    fn test_invalid_base_url_is_configuration_error() {
        let err = ElevenLabsClient::builder()
            .api_key("sk-test")
            .base_url("::nope::")
            .build()
            .unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_timeout_and_proxy_setters() {
        let client = ElevenLabsClient::builder()
            .api_key("sk-test")
            .timeout(Duration::from_secs(5))
            .proxy_url("http://proxy.local:3128")
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.elevenlabs.io");
    }

    #[test]
    fn test_unsupported_proxy_is_configuration_error() {
        let err = ElevenLabsClient::builder()
            .api_key("sk-test")
            .proxy_url("ftp://proxy.local:21")
            .build()
            .unwrap_err();
        assert!(err.is_configuration());
        assert_eq!(
            err.context().and_then(|c| c.field_path.as_deref()),
            Some("ELEVENLABS_PROXY_URL")
        );
    }

    #[test]
    fn test_settings_from_env() {
        let env = EnvView::new()
            .with_var("ELEVENLABS_BASE_URL", "http://127.0.0.1:9999")
            .with_var("ELEVENLABS_TIMEOUT_SECS", "3");
        let client = ElevenLabsClient::builder()
            .api_key("sk-test")
            .settings_from_env(&env)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
    }
}
