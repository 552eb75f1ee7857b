//! Run statistics
//!
//! Counts and timings collected over one scrape run, printed when the run
//! finishes.

use chrono::{DateTime, Utc};
use std::path::PathBuf;

/// Summary of a scrape run
#[derive(Debug, Clone)]
pub struct RunStatistics {
    /// When the run started
    pub started_at: DateTime<Utc>,

    /// When the run finished (set once outputs are written)
    pub finished_at: Option<DateTime<Utc>>,

    /// Listing page the plan links came from
    pub listing_url: String,

    /// Number of plan links found on the listing page
    pub links_found: usize,

    /// Number of detail pages turned into records
    pub plans_scraped: usize,

    /// Detail pages dropped from the output, with the reason
    pub failures: Vec<(String, String)>,

    /// Files written
    pub outputs: Vec<PathBuf>,
}

impl RunStatistics {
    /// Starts statistics for a run against `listing_url`
    pub fn start(listing_url: impl Into<String>) -> Self {
        Self {
            started_at: Utc::now(),
            finished_at: None,
            listing_url: listing_url.into(),
            links_found: 0,
            plans_scraped: 0,
            failures: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Marks the run finished
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Number of detail pages that failed
    pub fn plans_failed(&self) -> usize {
        self.failures.len()
    }

    /// Returns the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        let attempted = self.plans_scraped + self.plans_failed();
        if attempted == 0 {
            return 0.0;
        }
        (self.plans_scraped as f64 / attempted as f64) * 100.0
    }

    /// Run duration in seconds, once finished
    pub fn duration_seconds(&self) -> Option<f64> {
        self.finished_at
            .map(|finished| (finished - self.started_at).num_milliseconds() as f64 / 1000.0)
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &RunStatistics) {
    println!("=== Scrape Statistics ===\n");

    println!("Overview:");
    println!("  Listing page: {}", stats.listing_url);
    println!("  Plan links found: {}", stats.links_found);
    println!("  Plans scraped: {}", stats.plans_scraped);
    println!("  Plans failed: {}", stats.plans_failed());
    if let Some(duration) = stats.duration_seconds() {
        println!("  Duration: {:.1}s", duration);
    }
    println!();

    if !stats.failures.is_empty() {
        println!("Failed Pages ({}):", stats.failures.len());
        for (url, reason) in &stats.failures {
            println!("  - {}: {}", url, reason);
        }
        println!();
    }

    if !stats.outputs.is_empty() {
        println!("Output Files:");
        for path in &stats.outputs {
            println!("  - {}", path.display());
        }
        println!();
    }

    println!(
        "Success Rate: {:.1}% ({} / {} plans successfully scraped)",
        stats.success_rate(),
        stats.plans_scraped,
        stats.plans_scraped + stats.plans_failed()
    );
}
