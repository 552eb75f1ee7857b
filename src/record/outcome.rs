use crate::record::PlanRecord;
use std::fmt;

/// Result of processing a single detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The page rendered and a record was extracted
    Scraped(PlanRecord),

    /// The page could not be rendered or parsed; it is left out of the output
    Failed {
        /// The detail page URL
        url: String,
        /// Why the page was dropped
        reason: String,
    },
}

impl PageOutcome {
    /// Returns true if a record was extracted
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Scraped(_))
    }

    /// Consumes the outcome, keeping only a scraped record
    pub fn into_record(self) -> Option<PlanRecord> {
        match self {
            Self::Scraped(record) => Some(record),
            Self::Failed { .. } => None,
        }
    }
}

impl fmt::Display for PageOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scraped(record) => write!(f, "scraped '{}'", record.title),
            Self::Failed { url, reason } => write!(f, "failed {}: {}", url, reason),
        }
    }
}
