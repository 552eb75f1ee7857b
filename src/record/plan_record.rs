//! The plan record extracted from a detail page

use serde::{Deserialize, Serialize};

/// Field labels in output order
pub const FIELD_NAMES: [&str; 4] = ["Title", "Description", "Price Details", "Contact Info"];

/// One broadband plan as scraped from its detail page
///
/// Every field is always populated. A field whose markup was missing holds the
/// placeholder value instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    #[serde(rename = "Title")]
    pub title: String,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "Price Details")]
    pub price_details: String,

    /// Contact link URL, or the placeholder
    #[serde(rename = "Contact Info")]
    pub contact_info: String,
}

impl PlanRecord {
    /// Creates a record with every field set to the placeholder
    pub fn placeholder(value: &str) -> Self {
        Self {
            title: value.to_string(),
            description: value.to_string(),
            price_details: value.to_string(),
            contact_info: value.to_string(),
        }
    }

    /// Field values in output order
    pub fn values(&self) -> [&str; 4] {
        [
            self.title.as_str(),
            self.description.as_str(),
            self.price_details.as_str(),
            self.contact_info.as_str(),
        ]
    }

    /// `(label, value)` pairs in output order
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        FIELD_NAMES.into_iter().zip(self.values())
    }
}
