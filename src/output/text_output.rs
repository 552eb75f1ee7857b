//! Plain-text output
//!
//! Each plan is a numbered block:
//!
//! ```text
//! Plan 1:
//! Title: Fibre 100
//! Description: Unlimited data
//! Price Details: $59.99/month
//! Contact Info: https://isp.example/signup
//!
//! ```

use crate::output::traits::{write_file, OutputHandler, OutputResult};
use crate::record::PlanRecord;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Writes plans as numbered `Field: Value` blocks
#[derive(Debug, Clone)]
pub struct TextOutputHandler {
    path: PathBuf,
}

impl TextOutputHandler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Formats records as numbered text blocks separated by blank lines
pub fn format_text(records: &[PlanRecord]) -> String {
    let mut text = String::new();

    for (index, record) in records.iter().enumerate() {
        // Writing into a String cannot fail
        let _ = writeln!(text, "Plan {}:", index + 1);
        for (label, value) in record.fields() {
            let _ = writeln!(text, "{}: {}", label, value);
        }
        text.push('\n');
    }

    text
}

impl OutputHandler for TextOutputHandler {
    fn format_name(&self) -> &'static str {
        "text"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, records: &[PlanRecord]) -> OutputResult<()> {
        write_file(&self.path, format_text(records).as_bytes())
    }
}
