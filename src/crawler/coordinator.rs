//! Scrape coordinator - main pipeline orchestration
//!
//! This module runs one complete scrape:
//! - Rendering the listing page and extracting plan links
//! - Fanning the detail pages out to the worker pool
//! - Keeping the successful records in listing order
//! - Writing the outputs and collecting run statistics

use crate::config::Config;
use crate::crawler::parser::{
    extract_plan_links, extract_plan_record, DetailSelectors, ListingSelectors,
};
use crate::crawler::pool::WorkerPool;
use crate::crawler::{build_renderer, PageRenderer};
use crate::output::{write_outputs, RunStatistics};
use crate::record::{PageOutcome, PlanRecord};
use crate::ScoutError;
use std::sync::Arc;
use url::Url;

/// Main scrape coordinator structure
pub struct Coordinator {
    config: Arc<Config>,
    renderer: Arc<dyn PageRenderer>,
    selectors: Arc<DetailSelectors>,
    listing: ListingSelectors,
    base_url: Url,
    listing_url: Url,
    pool: WorkerPool,
}

impl Coordinator {
    /// Creates a coordinator using the renderer named in the configuration
    pub fn new(config: Config) -> Result<Self, ScoutError> {
        let renderer = build_renderer(&config.scraper)?;
        Self::with_renderer(config, renderer)
    }

    /// Creates a coordinator with an explicit renderer
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Selectors compiled and URLs resolved
    /// * `Err(ScoutError)` - A selector or URL in the configuration is invalid
    pub fn with_renderer(
        config: Config,
        renderer: Arc<dyn PageRenderer>,
    ) -> Result<Self, ScoutError> {
        let selectors = DetailSelectors::from_config(&config.selectors)?;
        let listing = ListingSelectors::from_config(&config.selectors)?;
        let base_url = Url::parse(&config.site.base_url)?;
        let listing_url = config.listing_url()?;
        let pool = WorkerPool::new(config.scraper.max_workers as usize);

        Ok(Self {
            config: Arc::new(config),
            renderer,
            selectors: Arc::new(selectors),
            listing,
            base_url,
            listing_url,
            pool,
        })
    }

    /// The listing page this coordinator starts from
    pub fn listing_url(&self) -> &Url {
        &self.listing_url
    }

    /// Renders the listing page and extracts the plan detail links
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<String>)` - Absolute plan URLs in listing order (never empty)
    /// * `Err(ScoutError::ListingUnavailable)` - The listing page failed to render
    /// * `Err(ScoutError::NoPlanLinks)` - The listing page held no plan links
    pub async fn discover_plan_links(&self) -> Result<Vec<String>, ScoutError> {
        let url = self.listing_url.as_str();
        tracing::info!("Loading listing page: {}", url);

        let html = self
            .renderer
            .render(url)
            .await
            .map_err(|source| ScoutError::ListingUnavailable {
                url: url.to_string(),
                source,
            })?;

        let links = extract_plan_links(
            &html,
            &self.base_url,
            &self.listing,
            &self.config.site.link_pattern,
        );

        if links.is_empty() {
            tracing::warn!("No plan links found on {}", url);
            return Err(ScoutError::NoPlanLinks {
                url: url.to_string(),
            });
        }

        tracing::info!("Found {} plans to process.", links.len());
        Ok(links)
    }

    /// Scrapes every detail page through the worker pool
    ///
    /// Returns one outcome per URL, in the order given.
    pub async fn scrape_plans(&self, urls: Vec<String>) -> Vec<PageOutcome> {
        tracing::debug!(
            "Scraping {} detail pages with {} workers",
            urls.len(),
            self.pool.max_workers()
        );

        let results = self
            .pool
            .map(urls.clone(), |url| {
                let renderer = Arc::clone(&self.renderer);
                let selectors = Arc::clone(&self.selectors);
                async move { scrape_plan(renderer.as_ref(), &selectors, &url).await }
            })
            .await;

        results
            .into_iter()
            .zip(urls)
            .map(|(result, url)| {
                result.unwrap_or_else(|e| {
                    tracing::error!("Worker for {} panicked: {}", url, e);
                    PageOutcome::Failed {
                        url,
                        reason: format!("worker panicked: {}", e),
                    }
                })
            })
            .collect()
    }

    /// Runs the complete pipeline
    ///
    /// 1. Render the listing page and extract plan links
    /// 2. Scrape detail pages concurrently
    /// 3. Keep successful records in listing order
    /// 4. Write CSV, JSON and text outputs
    pub async fn run(&self) -> Result<RunStatistics, ScoutError> {
        let mut stats = RunStatistics::start(self.listing_url.as_str());

        let links = self.discover_plan_links().await?;
        stats.links_found = links.len();

        let outcomes = self.scrape_plans(links).await;
        let records = collect_records(outcomes, &mut stats);
        tracing::info!("Successfully scraped {} plans.", records.len());

        stats.outputs = write_outputs(&self.config.output, &records)?;
        stats.finish();

        tracing::info!(
            "Data has been saved to {}",
            stats
                .outputs
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(stats)
    }
}

/// Renders and extracts a single detail page
///
/// Any failure becomes `PageOutcome::Failed`; it never aborts the batch.
pub async fn scrape_plan(
    renderer: &dyn PageRenderer,
    selectors: &DetailSelectors,
    url: &str,
) -> PageOutcome {
    tracing::info!("Scraping: {}", url);

    let html = match renderer.render(url).await {
        Ok(html) => html,
        Err(e) => {
            tracing::warn!("Error processing {}: {}", url, e);
            return PageOutcome::Failed {
                url: url.to_string(),
                reason: e.to_string(),
            };
        }
    };

    match extract_plan_record(&html, selectors) {
        Ok(record) => PageOutcome::Scraped(record),
        Err(e) => {
            tracing::warn!("Error scraping {}: {}", url, e);
            PageOutcome::Failed {
                url: url.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

/// Keeps the scraped records and tallies the failures
fn collect_records(outcomes: Vec<PageOutcome>, stats: &mut RunStatistics) -> Vec<PlanRecord> {
    let mut records = Vec::with_capacity(outcomes.len());

    for outcome in outcomes {
        match outcome {
            PageOutcome::Scraped(record) => records.push(record),
            PageOutcome::Failed { url, reason } => stats.failures.push((url, reason)),
        }
    }

    stats.plans_scraped = records.len();
    records
}

/// Runs the main scrape operation
///
/// # Example
///
/// ```no_run
/// use plan_scout::config::default_config;
/// use plan_scout::crawler::run_scrape;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let stats = run_scrape(default_config()?).await?;
/// println!("{} plans scraped", stats.plans_scraped);
/// # Ok(())
/// # }
/// ```
pub async fn run_scrape(config: Config) -> Result<RunStatistics, ScoutError> {
    let coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
