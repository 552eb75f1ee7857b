//! Output module for persisting scraped plans
//!
//! This module handles:
//! - Writing plans as CSV, JSON and plain text
//! - Recording run statistics

mod csv_output;
mod json_output;
pub mod stats;
mod text_output;
mod traits;

pub use csv_output::CsvOutputHandler;
pub use json_output::JsonOutputHandler;
pub use stats::{print_statistics, RunStatistics};
pub use text_output::{format_text, TextOutputHandler};
pub use traits::{OutputError, OutputHandler, OutputResult};

use crate::config::OutputConfig;
use crate::record::PlanRecord;
use std::path::PathBuf;

/// Builds the CSV, JSON and text handlers for the configured paths
pub fn handlers_from_config(config: &OutputConfig) -> Vec<Box<dyn OutputHandler>> {
    vec![
        Box::new(CsvOutputHandler::new(&config.csv_path)),
        Box::new(JsonOutputHandler::new(&config.json_path)),
        Box::new(TextOutputHandler::new(&config.text_path)),
    ]
}

/// Writes the records to every configured output
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - The files written, in CSV, JSON, text order
/// * `Err(OutputError)` - The first output that failed
pub fn write_outputs(config: &OutputConfig, records: &[PlanRecord]) -> OutputResult<Vec<PathBuf>> {
    let mut written = Vec::new();

    for handler in handlers_from_config(config) {
        handler.write(records)?;
        tracing::debug!(
            "Wrote {} plans as {} to {}",
            records.len(),
            handler.format_name(),
            handler.path().display()
        );
        written.push(handler.path().to_path_buf());
    }

    Ok(written)
}
