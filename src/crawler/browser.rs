//! Headless Chrome renderer
//!
//! Each render launches its own browser session, navigates to the page, waits
//! for client-side content to settle, reads the page source and then shuts the
//! session down. Shutdown runs whether the render succeeded or not.

use crate::crawler::fetcher::PageRenderer;
use crate::crawler::session::{render_in_session, RenderSession};
use crate::RenderError;
use async_trait::async_trait;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Renderer backed by a headless Chrome/Chromium process
#[derive(Debug, Clone)]
pub struct ChromeRenderer {
    executable: Option<PathBuf>,
    user_agent: String,
    load_delay: Duration,
}

impl ChromeRenderer {
    /// Creates a renderer
    ///
    /// When `executable` is `None` the Chrome binary is located automatically.
    pub fn new(executable: Option<PathBuf>, user_agent: &str, load_delay: Duration) -> Self {
        Self {
            executable,
            user_agent: user_agent.to_string(),
            load_delay,
        }
    }

    fn browser_config(&self, url: &str) -> Result<BrowserConfig, RenderError> {
        let mut builder = BrowserConfig::builder().arg(format!("--user-agent={}", self.user_agent));
        if let Some(executable) = &self.executable {
            builder = builder.chrome_executable(executable);
        }
        builder.build().map_err(|message| RenderError::Browser {
            url: url.to_string(),
            message,
        })
    }
}

/// A launched browser plus the task driving its CDP connection
struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
}

impl BrowserSession {
    async fn launch(config: BrowserConfig, url: &str) -> Result<Self, RenderError> {
        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| browser_error(url, e))?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        Ok(Self { browser, handler })
    }
}

#[async_trait]
impl RenderSession for BrowserSession {
    async fn page_source(&self, url: &str, load_delay: Duration) -> Result<String, RenderError> {
        let page = self
            .browser
            .new_page(url)
            .await
            .map_err(|e| browser_error(url, e))?;

        tokio::time::sleep(load_delay).await;

        let content = page.content().await.map_err(|e| browser_error(url, e));

        if let Err(e) = page.close().await {
            tracing::debug!("Failed to close page for {}: {}", url, e);
        }

        content
    }

    async fn shutdown(mut self, url: &str) {
        if let Err(e) = self.browser.close().await {
            tracing::warn!("Failed to close browser after rendering {}: {}", url, e);
        }
        if let Err(e) = self.browser.wait().await {
            tracing::warn!("Browser process for {} did not exit cleanly: {}", url, e);
        }
        self.handler.abort();
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        self.handler.abort();
    }
}

fn browser_error(url: &str, error: impl std::fmt::Display) -> RenderError {
    RenderError::Browser {
        url: url.to_string(),
        message: error.to_string(),
    }
}

#[async_trait]
impl PageRenderer for ChromeRenderer {
    async fn render(&self, url: &str) -> Result<String, RenderError> {
        let config = self.browser_config(url)?;
        let session = BrowserSession::launch(config, url).await?;
        render_in_session(session, url, self.load_delay).await
    }
}
