//! Plan-Scout main entry point
//!
//! This is the command-line interface for the Plan-Scout catalog scraper.

use anyhow::Context;
use clap::Parser;
use plan_scout::config::{default_config, load_config_with_hash, Config, RendererKind};
use plan_scout::crawler::scrape;
use plan_scout::output::print_statistics;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Plan-Scout: a broadband plan catalog scraper
///
/// Plan-Scout renders the plan listing page, scrapes every plan detail page
/// with a fixed pool of workers, and saves the plans as CSV, JSON and text.
#[derive(Parser, Debug)]
#[command(name = "plan-scout")]
#[command(version)]
#[command(about = "A broadband plan catalog scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Override the configured page renderer
    #[arg(long, value_enum)]
    renderer: Option<RendererKind>,

    /// Validate config and show what would be scraped without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            default_config().context("Built-in configuration is invalid")?
        }
    };

    if let Some(renderer) = cli.renderer {
        config.scraper.renderer = renderer;
        plan_scout::config::validate(&config).context("Invalid renderer override")?;
    }

    if cli.dry_run {
        handle_dry_run(&config)?;
    } else {
        handle_scrape(config, cli.quiet).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("plan_scout=info,warn"),
            1 => EnvFilter::new("plan_scout=debug,info"),
            2 => EnvFilter::new("plan_scout=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) -> anyhow::Result<()> {
    let listing_url = config.listing_url().context("Invalid listing URL")?;

    println!("=== Plan-Scout Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  Listing page: {}", listing_url);
    println!("  Plan link pattern: {}", config.site.link_pattern);

    println!("\nScraper:");
    println!("  Workers: {}", config.scraper.max_workers);
    println!("  Load delay: {}ms", config.scraper.load_delay_ms);
    println!("  Renderer: {:?}", config.scraper.renderer);
    if let Some(executable) = &config.scraper.chrome_executable {
        println!("  Chrome executable: {}", executable);
    }
    println!("  User agent: {}", config.scraper.user_agent);

    println!("\nSelectors:");
    println!("  Listing container: {}", config.selectors.listing_container);
    println!("  Title: {}", config.selectors.title);
    println!("  Description: {}", config.selectors.description);
    println!("  Price details: {}", config.selectors.price_details);
    println!("  Contact info: {}", config.selectors.contact_info);
    println!("  Placeholder: {}", config.selectors.placeholder);

    println!("\nOutput:");
    println!("  CSV: {}", config.output.csv_path);
    println!("  JSON: {}", config.output.json_path);
    println!("  Text: {}", config.output.text_path);

    println!("\n✓ Configuration is valid");

    Ok(())
}

/// Handles the main scrape operation
async fn handle_scrape(config: Config, quiet: bool) -> anyhow::Result<()> {
    tracing::info!(
        "Starting scrape with {} workers ({:?} renderer)",
        config.scraper.max_workers,
        config.scraper.renderer
    );

    match scrape(config).await {
        Ok(stats) => {
            tracing::info!("Scrape completed successfully");
            if !quiet {
                print_statistics(&stats);
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!("Scrape failed: {}", e);
            Err(e.into())
        }
    }
}
