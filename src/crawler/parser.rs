//! HTML extraction for listing and detail pages
//!
//! This module handles parsing rendered page source to extract:
//! - Plan detail links from the listing page
//! - The four plan fields from a detail page

use crate::config::SelectorConfig;
use crate::record::PlanRecord;
use crate::url::{is_plan_link, resolve_plan_link};
use crate::ConfigError;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;
use url::Url;

/// Whole-page extraction failures
///
/// Missing fields are not errors; they fall back to the placeholder.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("page source is empty")]
    EmptyDocument,
}

/// Compiles a configured selector string
pub fn compile_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Compiled selectors for the listing page
#[derive(Debug, Clone)]
pub struct ListingSelectors {
    /// Element that holds the plan links
    pub container: Selector,
    /// Anchors considered inside the container
    pub anchor: Selector,
}

impl ListingSelectors {
    /// Compiles the listing selectors from configuration
    pub fn from_config(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            container: compile_selector(&config.listing_container)?,
            anchor: compile_selector("a[href]")?,
        })
    }
}

/// Compiled selectors for the detail page fields
#[derive(Debug, Clone)]
pub struct DetailSelectors {
    pub title: Selector,
    pub description: Selector,
    pub price_details: Selector,
    pub contact_info: Selector,
    pub placeholder: String,
}

impl DetailSelectors {
    /// Compiles the detail selectors from configuration
    pub fn from_config(config: &SelectorConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            title: compile_selector(&config.title)?,
            description: compile_selector(&config.description)?,
            price_details: compile_selector(&config.price_details)?,
            contact_info: compile_selector(&config.contact_info)?,
            placeholder: config.placeholder.clone(),
        })
    }
}

/// Extracts plan detail links from the listing page
///
/// Only anchors inside the first element matching the container selector are
/// considered.
/// An anchor qualifies when its `href` contains `link_pattern`; qualifying links
/// are resolved against `base_url` and returned in document order.
///
/// A listing page without the container yields an empty list and a warning.
///
/// # Example
///
/// ```
/// use plan_scout::config::SelectorConfig;
/// use plan_scout::crawler::{extract_plan_links, ListingSelectors};
/// use url::Url;
///
/// let html = r#"<div class="listview_list__o3jbr">
///     <a href="/broadband/fibre-100">Fibre 100</a>
///     <a href="/about">About</a>
/// </div>"#;
/// let base = Url::parse("https://findplanking.com").unwrap();
/// let selectors = ListingSelectors::from_config(&SelectorConfig::default()).unwrap();
///
/// let links = extract_plan_links(html, &base, &selectors, "/broadband/");
/// assert_eq!(links, vec!["https://findplanking.com/broadband/fibre-100"]);
/// ```
pub fn extract_plan_links(
    html: &str,
    base_url: &Url,
    selectors: &ListingSelectors,
    link_pattern: &str,
) -> Vec<String> {
    let document = Html::parse_document(html);

    let Some(section) = document.select(&selectors.container).next() else {
        tracing::warn!("Listing container not found in page source");
        return Vec::new();
    };

    section
        .select(&selectors.anchor)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter(|href| is_plan_link(href, link_pattern))
        .filter_map(|href| resolve_plan_link(href, base_url))
        .collect()
}

/// Extracts a plan record from a detail page
///
/// Each field is extracted on its own: a field whose element is missing,
/// whose text is blank, or (for the contact link) whose `href` is missing
/// gets the placeholder while the other fields keep their values.
///
/// # Returns
///
/// * `Ok(PlanRecord)` - Record with every field populated
/// * `Err(ExtractError::EmptyDocument)` - The page source was blank
pub fn extract_plan_record(
    html: &str,
    selectors: &DetailSelectors,
) -> Result<PlanRecord, ExtractError> {
    if html.trim().is_empty() {
        return Err(ExtractError::EmptyDocument);
    }

    let document = Html::parse_document(html);
    let placeholder = selectors.placeholder.as_str();

    Ok(PlanRecord {
        title: first_text(&document, &selectors.title).unwrap_or_else(|| placeholder.to_string()),
        description: first_text(&document, &selectors.description)
            .unwrap_or_else(|| placeholder.to_string()),
        price_details: first_text(&document, &selectors.price_details)
            .unwrap_or_else(|| placeholder.to_string()),
        contact_info: first_href(&document, &selectors.contact_info)
            .unwrap_or_else(|| placeholder.to_string()),
    })
}

/// Whitespace-collapsed text of the first matching element
fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
}

/// `href` of the first matching element
fn first_href(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(|href| href.trim().to_string())
        .filter(|href| !href.is_empty())
}

/// All text under an element on one line, runs of whitespace collapsed to a
/// single space
fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
