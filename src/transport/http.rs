use crate::config::ClientSettings;
use crate::{BoxStream, Error, ErrorContext, Result};
use bytes::Bytes;
use futures::TryStreamExt;
use reqwest::{Method, Proxy, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "xi-api-key";

/// Authenticated HTTP transport bound to one API root.
///
/// Building it performs no network I/O; connections are opened lazily by the
/// first request.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl HttpTransport {
    pub fn new(api_key: String, settings: &ClientSettings) -> Result<Self> {
        let base_url = Url::parse(&settings.base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("invalid base URL: {}", e),
                ErrorContext::new()
                    .with_field_path(crate::config::BASE_URL_ENV)
                    .with_source("transport"),
            )
        })?;

        let mut builder = reqwest::Client::builder()
            .timeout(settings.timeout)
            .user_agent(concat!("elevenlabs-kit/", env!("CARGO_PKG_VERSION")));

        if let Some(proxy_url) = &settings.proxy_url {
            let proxy = Proxy::all(proxy_url).map_err(|e| {
                Error::configuration_with_context(
                    format!("invalid proxy URL: {}", e),
                    ErrorContext::new()
                        .with_field_path(crate::config::PROXY_URL_ENV)
                        .with_source("transport"),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| {
            Error::configuration_with_context(
                format!("failed to create HTTP client: {}", e),
                ErrorContext::new().with_source("transport"),
            )
        })?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// API root without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str().trim_end_matches('/')
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Join path segments onto the API root, percent-encoding each one so a
    /// segment can never introduce a separator, query or fragment.
    pub fn url_for(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::configuration_with_context(
                    "base URL cannot carry a path",
                    ErrorContext::new()
                        .with_field_path(crate::config::BASE_URL_ENV)
                        .with_source("transport"),
                )
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        let url = self.url_for(segments)?;
        debug!(%method, %url, "sending request");
        Ok(self
            .client
            .request(method, url)
            .header(API_KEY_HEADER, &self.api_key))
    }

    /// GET the resource at `segments` and decode the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T> {
        let response = self.send(self.request(Method::GET, segments)?).await?;
        let bytes = response.bytes().await.map_err(TransportError::Http)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// POST a JSON body and return the whole response body.
    pub async fn post_for_bytes(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        body: &serde_json::Value,
        accept: &str,
    ) -> Result<Bytes> {
        let request = self.post_json(segments, query, body, accept)?;
        let response = self.send(request).await?;
        Ok(response.bytes().await.map_err(TransportError::Http)?)
    }

    /// POST a JSON body and return the response body as it arrives.
    ///
    /// Status errors are reported before the stream is handed out; later
    /// chunks can still fail with a transport error.
    pub async fn post_for_stream(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        body: &serde_json::Value,
        accept: &str,
    ) -> Result<BoxStream<'static, Bytes>> {
        let request = self.post_json(segments, query, body, accept)?;
        let response = self.send(request).await?;
        let chunks = response
            .bytes_stream()
            .map_err(|e| Error::Transport(TransportError::Http(e)));
        Ok(Box::pin(chunks))
    }

    fn post_json(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
        body: &serde_json::Value,
        accept: &str,
    ) -> Result<RequestBuilder> {
        Ok(self
            .request(Method::POST, segments)?
            .query(query)
            .header(reqwest::header::ACCEPT, accept)
            .json(body))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(TransportError::Http)?;
        let status = response.status();
        if !status.is_success() {
            let bytes = response.bytes().await.map_err(TransportError::Http)?;
            warn!(status = status.as_u16(), "request rejected by ElevenLabs");
            return Err(Error::remote(
                status.as_u16(),
                String::from_utf8_lossy(&bytes).into_owned(),
            ));
        }
        Ok(response)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(base_url: &str) -> HttpTransport {
        let settings = ClientSettings::default().with_base_url(base_url);
        HttpTransport::new("sk-test".to_string(), &settings).unwrap()
    }

    #[test]
    fn test_url_for_joins_segments() {
        let t = transport("https://api.elevenlabs.io");
        let url = t.url_for(&["v1", "models"]).unwrap();
        assert_eq!(url.as_str(), "https://api.elevenlabs.io/v1/models");
        assert_eq!(t.base_url(), "https://api.elevenlabs.io");
    }

    #[test]
    fn test_url_for_keeps_base_path() {
        let t = transport("http://localhost:4010/proxy");
        let url = t.url_for(&["v1", "voices"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:4010/proxy/v1/voices");
    }

    #[test]
    fn test_url_for_encodes_reserved_characters() {
        let t = transport("https://api.elevenlabs.io");
        let url = t
            .url_for(&["v1", "text-to-speech", "a/b?c#d"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.elevenlabs.io/v1/text-to-speech/a%2Fb%3Fc%23d"
        );
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }
}
