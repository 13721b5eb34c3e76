//! HTTP transport for fetching JSON payloads.
//! One GET per call, no caching, no retry; statuses are surfaced, not interpreted.

use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT},
};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{OctodirError, Result};

const GITHUB_API_VERSION: &str = "2022-11-28";

/// Fetches a URL and decodes the response body as JSON.
///
/// Each call issues exactly one request. Failures are surfaced without
/// interpretation: what a 404 means for a given URL is the caller's decision.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET `url` and return the decoded body.
    async fn get_json(&self, url: &str) -> Result<Value>;
}

/// Production [`Transport`] backed by a [`reqwest::Client`] carrying the
/// standard GitHub request headers.
#[derive(Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Create an unauthenticated transport.
    pub fn new() -> Result<Self> {
        Self::build(None)
    }

    /// Create a transport that sends `token` as a bearer Authorization header.
    pub fn with_token(token: &str) -> Result<Self> {
        Self::build(Some(token))
    }

    fn build(token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();

        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("octodir"));

        if let Some(token) = token {
            let mut auth = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|_| OctodirError::InvalidToken)?;
            auth.set_sensitive(true);
            headers.insert(AUTHORIZATION, auth);
        }

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!(%url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!(%url, %status, "request failed");
            return Err(OctodirError::Status {
                status,
                url: url.to_string(),
            });
        }

        // Decode from text so a malformed body reports as a JSON error
        // rather than a transport error.
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
