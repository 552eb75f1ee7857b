//! Configuration module for Plan-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every key has a built-in default, so running without a file targets the
//! findplanking.com broadband catalog.
//!
//! # Example
//!
//! ```no_run
//! use plan_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scout.toml")).unwrap();
//! println!("Scraping with {} workers", config.scraper.max_workers);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, OutputConfig, RendererKind, ScraperConfig, SelectorConfig, SiteConfig,
};

// Re-export parser functions
pub use parser::{
    compute_config_hash, default_config, hash_config_content, load_config, load_config_with_hash,
    parse_config,
};
pub use validation::{validate, MAX_WORKERS};
