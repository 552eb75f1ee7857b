//! JSON output
//!
//! An array of plan objects, UTF-8, indented with four spaces.

use crate::output::traits::{write_file, OutputError, OutputHandler, OutputResult};
use crate::record::PlanRecord;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::{Path, PathBuf};

/// Writes plans as a pretty-printed JSON array
#[derive(Debug, Clone)]
pub struct JsonOutputHandler {
    path: PathBuf,
}

impl JsonOutputHandler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Formats records as indented JSON bytes
    pub fn format(&self, records: &[PlanRecord]) -> OutputResult<Vec<u8>> {
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);

        records
            .serialize(&mut serializer)
            .map_err(|source| OutputError::Json {
                path: self.path.clone(),
                source,
            })?;

        Ok(buffer)
    }
}

impl OutputHandler for JsonOutputHandler {
    fn format_name(&self) -> &'static str {
        "JSON"
    }

    fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, records: &[PlanRecord]) -> OutputResult<()> {
        let bytes = self.format(records)?;
        write_file(&self.path, &bytes)
    }
}
