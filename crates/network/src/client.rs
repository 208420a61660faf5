// crates/network/src/client.rs
//! HTTP client for retrieving feed documents

use crate::error::{NetworkError, NetworkResult};
use futures::StreamExt;
use reqwest::{Client as ReqwestClient, Response, Url};
use std::time::Duration;

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Maximum redirects to follow
    pub max_redirects: usize,
    /// Largest body accepted, in bytes
    pub max_body_bytes: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("syndic/{}", env!("CARGO_PKG_VERSION")),
            max_redirects: 10,
            max_body_bytes: 16 * 1024 * 1024,
        }
    }
}

/// HTTP client returning raw response bodies
#[derive(Debug, Clone)]
pub struct Client {
    inner: ReqwestClient,
    config: ClientConfig,
}

impl Client {
    /// Creates a new client with default configuration
    pub fn new() -> NetworkResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> NetworkResult<Self> {
        let inner = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()
            .map_err(NetworkError::Http)?;

        Ok(Self { inner, config })
    }

    /// Active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Downloads the body of `url`
    ///
    /// Only `http` and `https` URLs are accepted. Non-2xx responses and bodies
    /// over `max_body_bytes` are errors; nothing is retried.
    pub async fn fetch(&self, url: &str) -> NetworkResult<Vec<u8>> {
        let url = parse_url(url)?;
        log::debug!("GET {}", url);

        let response = self.inner.get(url.clone()).send().await?;
        let status = response.status();
        log::debug!("{} answered {}", url, status);

        if !status.is_success() {
            return Err(NetworkError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        read_limited(response, self.config.max_body_bytes).await
    }
}

fn parse_url(raw: &str) -> NetworkResult<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| NetworkError::InvalidUrl(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(NetworkError::InvalidUrl(format!(
            "{raw}: unsupported scheme {other:?}"
        ))),
    }
}

async fn read_limited(response: Response, limit: u64) -> NetworkResult<Vec<u8>> {
    let expected = response.content_length();

    if let Some(len) = expected {
        if len > limit {
            return Err(NetworkError::BodyTooLarge { limit });
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        if (bytes.len() + chunk.len()) as u64 > limit {
            return Err(NetworkError::BodyTooLarge { limit });
        }
        bytes.extend_from_slice(&chunk);
    }

    if let Some(expected) = expected {
        let received = bytes.len() as u64;
        if received < expected {
            return Err(NetworkError::IncompleteResponse { expected, received });
        }
    }

    Ok(bytes)
}
