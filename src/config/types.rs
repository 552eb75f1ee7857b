use serde::Deserialize;

/// Main configuration structure for Plan-Scout
///
/// Every section is optional; an absent section or key falls back to the
/// built-in defaults for findplanking.com.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site: SiteConfig,
    pub scraper: ScraperConfig,
    pub selectors: SelectorConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Full URL of the listing page (listing path appended to the base URL)
    pub fn listing_url(&self) -> Result<url::Url, url::ParseError> {
        let base = url::Url::parse(&self.site.base_url)?;
        crate::url::join_base(&base, &self.site.listing_path)
    }
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Base URL that relative plan links are resolved against
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the listing page, relative to the base URL
    #[serde(rename = "listing-path")]
    pub listing_path: String,

    /// Substring an `href` must contain to count as a plan link
    #[serde(rename = "link-pattern")]
    pub link_pattern: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://findplanking.com".to_string(),
            listing_path: "/broadband".to_string(),
            link_pattern: "/broadband/".to_string(),
        }
    }
}

/// Which renderer turns URLs into page source
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Plain HTTP GET
    #[default]
    Http,
    /// Headless Chrome session (requires the `chrome` feature)
    Chrome,
}

/// Scraper behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// Number of detail pages processed concurrently
    #[serde(rename = "max-workers")]
    pub max_workers: u32,

    /// Time to let dynamic content settle before reading the page (milliseconds)
    #[serde(rename = "load-delay-ms")]
    pub load_delay_ms: u64,

    pub renderer: RendererKind,

    /// Chrome/Chromium binary; auto-detected when unset
    #[serde(rename = "chrome-executable")]
    pub chrome_executable: Option<String>,

    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            max_workers: 5,
            load_delay_ms: 3000,
            renderer: RendererKind::default(),
            chrome_executable: None,
            user_agent: format!("plan-scout/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// CSS selectors for the listing and detail pages
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Element on the listing page that holds the plan links
    #[serde(rename = "listing-container")]
    pub listing_container: String,

    pub title: String,
    pub description: String,

    #[serde(rename = "price-details")]
    pub price_details: String,

    /// Anchor whose `href` is the contact link
    #[serde(rename = "contact-info")]
    pub contact_info: String,

    /// Value used for any field that could not be extracted
    pub placeholder: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            listing_container: "div.listview_list__o3jbr".to_string(),
            title: "div.plan_title__EaKQd".to_string(),
            description: "div.plan_ul__zhREz".to_string(),
            price_details: "div.plan_detail__azoZ2".to_string(),
            contact_info: r#"a[href][style="color: #C9FFFF"]"#.to_string(),
            placeholder: "N/A".to_string(),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    #[serde(rename = "csv-path")]
    pub csv_path: String,

    #[serde(rename = "json-path")]
    pub json_path: String,

    #[serde(rename = "text-path")]
    pub text_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "broadband_plans.csv".to_string(),
            json_path: "broadband_plans.json".to_string(),
            text_path: "broadband_plans.txt".to_string(),
        }
    }
}
