//! Single-use render sessions
//!
//! A session is opened for one page, asked for that page's source and then
//! shut down. `render_in_session` owns that sequence so the shutdown step
//! cannot be skipped when reading the page fails.

use crate::RenderError;
use async_trait::async_trait;
use std::time::Duration;

/// A launched rendering backend that serves one page and is then shut down
#[async_trait]
pub trait RenderSession: Send + Sync {
    /// Navigates to `url`, waits `load_delay` and returns the page source
    async fn page_source(&self, url: &str, load_delay: Duration) -> Result<String, RenderError>;

    /// Releases the session; failures are logged, not returned
    async fn shutdown(self, url: &str);
}

/// Reads one page through `session` and shuts the session down
///
/// Shutdown runs after both a successful and a failed read; the read's
/// result is returned unchanged.
pub async fn render_in_session<S: RenderSession>(
    session: S,
    url: &str,
    load_delay: Duration,
) -> Result<String, RenderError> {
    let result = session.page_source(url, load_delay).await;
    session.shutdown(url).await;

    if let Err(e) = &result {
        tracing::debug!("Render session for {} failed: {}", url, e);
    }
    result
}
