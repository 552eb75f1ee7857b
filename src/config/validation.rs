use crate::config::types::{Config, OutputConfig, RendererKind, ScraperConfig, SelectorConfig, SiteConfig};
use crate::url::join_base;
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Upper bound on concurrent detail-page workers
pub const MAX_WORKERS: u32 = 64;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_scraper_config(&config.scraper)?;
    validate_selector_config(&config.selectors)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates target site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", config.base_url, e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' must use http or https",
            config.base_url
        )));
    }

    join_base(&base, &config.listing_path).map_err(|e| {
        ConfigError::InvalidUrl(format!(
            "Invalid listing-path '{}': {}",
            config.listing_path, e
        ))
    })?;

    if config.link_pattern.is_empty() {
        return Err(ConfigError::Validation(
            "link-pattern cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates scraper behavior configuration
fn validate_scraper_config(config: &ScraperConfig) -> Result<(), ConfigError> {
    if config.max_workers < 1 || config.max_workers > MAX_WORKERS {
        return Err(ConfigError::Validation(format!(
            "max-workers must be between 1 and {}, got {}",
            MAX_WORKERS, config.max_workers
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.renderer == RendererKind::Chrome && !cfg!(feature = "chrome") {
        return Err(ConfigError::Validation(
            "renderer \"chrome\" requires building with the `chrome` feature".to_string(),
        ));
    }

    Ok(())
}

/// Validates that every selector parses
fn validate_selector_config(config: &SelectorConfig) -> Result<(), ConfigError> {
    for selector in [
        &config.listing_container,
        &config.title,
        &config.description,
        &config.price_details,
        &config.contact_info,
    ] {
        validate_selector(selector)?;
    }
    Ok(())
}

fn validate_selector(selector: &str) -> Result<(), ConfigError> {
    if selector.trim().is_empty() {
        return Err(ConfigError::InvalidSelector {
            selector: selector.to_string(),
            message: "selector cannot be empty".to_string(),
        });
    }

    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        message: e.to_string(),
    })?;

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    let paths = [
        ("csv-path", &config.csv_path),
        ("json-path", &config.json_path),
        ("text-path", &config.text_path),
    ];

    for (name, path) in paths {
        if path.is_empty() {
            return Err(ConfigError::Validation(format!("{} cannot be empty", name)));
        }
    }

    for (i, (name_a, path_a)) in paths.iter().enumerate() {
        for (name_b, path_b) in &paths[i + 1..] {
            if path_a == path_b {
                return Err(ConfigError::Validation(format!(
                    "{} and {} point to the same file '{}'",
                    name_a, name_b, path_a
                )));
            }
        }
    }

    Ok(())
}
