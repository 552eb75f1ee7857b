//! CSV output
//!
//! One header row (`Title,Description,Price Details,Contact Info`) followed by
//! one row per plan. Quoting follows RFC 4180 via the `csv` crate.

use crate::output::traits::{write_file, OutputError, OutputHandler, OutputResult};
use crate::record::{PlanRecord, FIELD_NAMES};
use std::path::{Path, PathBuf};

/// Writes plans as a CSV table
#[derive(Debug, Clone)]
pub struct CsvOutputHandler {
    path: PathBuf,
}

impl CsvOutputHandler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Formats records as CSV bytes
    pub fn format(&self, records: &[PlanRecord]) -> OutputResult<Vec<u8>> {
        let csv_error = |source| OutputError::Csv {
            path: self.path.clone(),
            source,
        };

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(FIELD_NAMES).map_err(csv_error)?;
        for record in records {
            writer.write_record(record.values()).map_err(csv_error)?;
        }

        writer.into_inner().map_err(|e| OutputError::Io {
            path: self.path.clone(),
            source: e.into_error(),
        })
    }
}

impl OutputHandler for CsvOutputHandler {
    fn format_name(&self) -> &'static str {
        "CSV"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, records: &[PlanRecord]) -> OutputResult<()> {
        let bytes = self.format(records)?;
        write_file(&self.path, &bytes)
    }
}
