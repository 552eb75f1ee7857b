//! Crawler module for page rendering and plan extraction
//!
//! This module contains the core scraping logic, including:
//! - Page rendering over HTTP or through headless Chrome
//! - Single-use render sessions with guaranteed shutdown
//! - Listing-link and detail-field extraction
//! - The bounded worker pool for detail pages
//! - Overall scrape coordination

#[cfg(feature = "chrome")]
mod browser;
mod coordinator;
mod fetcher;
mod parser;
mod pool;
mod session;

#[cfg(feature = "chrome")]
pub use browser::ChromeRenderer;
pub use coordinator::{run_scrape, scrape_plan, Coordinator};
pub use fetcher::{build_http_client, HttpRenderer, PageRenderer};
pub use parser::{
    compile_selector, extract_plan_links, extract_plan_record, DetailSelectors, ExtractError,
    ListingSelectors,
};
pub use pool::WorkerPool;
pub use session::{render_in_session, RenderSession};

use crate::config::{RendererKind, ScraperConfig};
use crate::{ConfigError, ScoutError};
use std::sync::Arc;
use std::time::Duration;

/// Builds the renderer selected in the scraper configuration
///
/// # Returns
///
/// * `Ok(Arc<dyn PageRenderer>)` - Renderer ready to share between workers
/// * `Err(ScoutError)` - The HTTP client could not be built, or Chrome
///   rendering was requested without the `chrome` feature
pub fn build_renderer(config: &ScraperConfig) -> Result<Arc<dyn PageRenderer>, ScoutError> {
    let load_delay = Duration::from_millis(config.load_delay_ms);

    match config.renderer {
        RendererKind::Http => {
            let client = build_http_client(&config.user_agent).map_err(|e| {
                ConfigError::Validation(format!("Failed to build HTTP client: {}", e))
            })?;
            Ok(Arc::new(HttpRenderer::new(client, load_delay)))
        }
        #[cfg(feature = "chrome")]
        RendererKind::Chrome => Ok(Arc::new(ChromeRenderer::new(
            config.chrome_executable.as_ref().map(std::path::PathBuf::from),
            &config.user_agent,
            load_delay,
        ))),
        #[cfg(not(feature = "chrome"))]
        RendererKind::Chrome => Err(ConfigError::Validation(
            "renderer \"chrome\" requires building with the `chrome` feature".to_string(),
        )
        .into()),
    }
}

/// Runs a complete scrape operation
///
/// This is the main entry point for a scrape. It will:
/// 1. Build the configured renderer
/// 2. Render the listing page and extract plan links
/// 3. Scrape the detail pages through the worker pool
/// 4. Write the CSV, JSON and text outputs
///
/// # Returns
///
/// * `Ok(RunStatistics)` - Scrape completed successfully
/// * `Err(ScoutError)` - Scrape failed
pub async fn scrape(config: crate::config::Config) -> Result<crate::output::RunStatistics, ScoutError> {
    run_scrape(config).await
}
