//! Shared HTTP plumbing for the endpoint clients.
//!
//! Holds the base URL and the `reqwest` client, attaches the raw
//! `Authorization` header on protected calls and turns every reply into an
//! [`ApiResponse`].

use anyhow::Result;
use reqwest::{header::AUTHORIZATION, Client, Method, RequestBuilder};

use crate::client::response::ApiResponse;
use crate::config::ClientConfig;

/// Base URL plus HTTP client, cloned into each endpoint client.
///
/// `reqwest::Client` is reference counted, so clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// API root without a trailing slash
    base_url: String,
    client: Client,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            base_url: config.base_url.clone(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Starts a request to `path`.
    ///
    /// `authorization` is sent verbatim, including an empty value, so callers
    /// can exercise the service's "not authorised" branch.
    pub(crate) fn request(&self, method: Method, path: &str, authorization: Option<&str>) -> RequestBuilder {
        let url = self.url(path);
        let mut request = self.client.request(method, &url);

        if let Some(token) = authorization {
            tracing::debug!("Using authorization header: {}", token_preview(token));
            request = request.header(AUTHORIZATION, token);
        }

        request
    }

    pub(crate) async fn execute(&self, request: RequestBuilder) -> Result<ApiResponse> {
        let request = request
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build request: {}", e))?;
        let method = request.method().clone();
        let url = request.url().clone();

        tracing::debug!("Making request: {} {}", method, url);

        let response = self.client.execute(request).await.map_err(|e| {
            tracing::error!("Network error during {} {}: {}", method, url, e);
            anyhow::anyhow!("Failed to reach Stellar Burgers at {}: {}", url, e)
        })?;

        let status = response.status();
        tracing::debug!("{} {} responded with {}", method, url, status);

        ApiResponse::from_reqwest(response).await
    }
}

/// First characters of a token, safe to log.
pub fn token_preview(token: &str) -> String {
    if token.is_empty() {
        return "<empty>".to_string();
    }
    format!("{}...", token.chars().take(10).collect::<String>())
}
