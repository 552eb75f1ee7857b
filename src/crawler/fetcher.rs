//! Page rendering over plain HTTP
//!
//! This module defines the renderer abstraction shared by the HTTP and
//! headless-browser backends, and implements the HTTP backend:
//! - Building the HTTP client with the configured user agent
//! - GET requests with status classification
//! - The settle delay before the page source is read

use crate::RenderError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Turns a URL into rendered page source
///
/// Implementations must be shareable across worker tasks.
#[async_trait]
pub trait PageRenderer: Send + Sync {
    /// Renders the page at `url` and returns its HTML source
    async fn render(&self, url: &str) -> Result<String, RenderError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use plan_scout::crawler::build_http_client;
///
/// let client = build_http_client("plan-scout/0.1").unwrap();
/// ```
pub fn build_http_client(user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Renderer that fetches page source with a single GET request
#[derive(Debug, Clone)]
pub struct HttpRenderer {
    client: Client,
    load_delay: Duration,
}

impl HttpRenderer {
    /// Creates a renderer from an existing client
    ///
    /// `load_delay` is awaited after the response headers arrive and before the
    /// body is read.
    pub fn new(client: Client, load_delay: Duration) -> Self {
        Self { client, load_delay }
    }

    /// Creates a renderer with a freshly built client
    pub fn with_user_agent(user_agent: &str, load_delay: Duration) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(user_agent)?, load_delay))
    }
}

#[async_trait]
impl PageRenderer for HttpRenderer {
    async fn render(&self, url: &str) -> Result<String, RenderError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| RenderError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RenderError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if !self.load_delay.is_zero() {
            tokio::time::sleep(self.load_delay).await;
        }

        response.text().await.map_err(|source| RenderError::Http {
            url: url.to_string(),
            source,
        })
    }
}
