//! Javadoc-Harvest main entry point
//!
//! This is the command-line interface for the Javadoc-Harvest crawler.

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use javadoc_harvest::config::{load_config_with_hash, Config};
use javadoc_harvest::crawler::{Crawler, Fetcher};
use javadoc_harvest::output::{
    load_library_summaries, load_version_statistics, print_crawl_result,
    print_library_summaries, print_version_statistics,
};
use javadoc_harvest::storage::{open_storage, SqliteStorage, Storage};
use javadoc_harvest::version::VersionResolver;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

/// Javadoc-Harvest: structured API data from Javadoc sites
///
/// Javadoc-Harvest crawls Javadoc documentation sites, normalizes packages,
/// classes and members, and stores them per library version in SQLite.
#[derive(Parser, Debug)]
#[command(name = "javadoc-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Harvests API reference data from Javadoc sites", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl one library version into the database
    Crawl {
        /// Documentation root, e.g. https://docs.example.com/lib/1.0/api/
        #[arg(long)]
        base_url: String,

        #[arg(long)]
        library: String,

        #[arg(long)]
        version: String,

        /// Delete stored data for this version before crawling
        #[arg(long)]
        fresh: bool,
    },

    /// Show stored entity counts for a library version
    Stats {
        #[arg(long)]
        library: String,

        #[arg(long)]
        version: String,
    },

    /// List stored libraries with their versions
    Libraries,

    /// List stored versions of a library, newest first
    Versions {
        #[arg(long)]
        library: String,
    },

    /// Resolve a version request ("latest" when omitted)
    Resolve {
        #[arg(long)]
        library: String,

        #[arg(long)]
        version: Option<String>,
    },

    /// Delete all stored data for a library version
    Clear {
        #[arg(long)]
        library: String,

        #[arg(long)]
        version: String,
    },

    /// Check whether a URL answers a HEAD request with 2xx
    Probe {
        #[arg(long)]
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    match cli.command {
        Command::Crawl {
            base_url,
            library,
            version,
            fresh,
        } => handle_crawl(config, &base_url, &library, &version, fresh).await,
        Command::Stats { library, version } => handle_stats(&config, &library, &version),
        Command::Libraries => handle_libraries(&config),
        Command::Versions { library } => handle_versions(&config, &library),
        Command::Resolve { library, version } => {
            handle_resolve(&config, &library, version.as_deref())
        }
        Command::Clear { library, version } => handle_clear(&config, &library, &version),
        Command::Probe { url } => handle_probe(&config, &url).await,
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("javadoc_harvest=info,warn"),
            1 => EnvFilter::new("javadoc_harvest=debug,info"),
            2 => EnvFilter::new("javadoc_harvest=trace,debug"),
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

fn open_database(config: &Config) -> anyhow::Result<SqliteStorage> {
    let path = Path::new(&config.output.database_path);
    open_storage(path).with_context(|| format!("Failed to open database {}", path.display()))
}

/// Handles the crawl command
async fn handle_crawl(
    config: Config,
    base_url: &str,
    library: &str,
    version: &str,
    fresh: bool,
) -> anyhow::Result<()> {
    let mut storage = open_database(&config)?;

    if fresh {
        let removed = storage.clear_library_version(library, version)?;
        tracing::info!(
            "Starting fresh crawl ({} stored packages removed)",
            removed
        );
    } else {
        tracing::info!("Starting crawl (already stored items are skipped)");
    }

    let fetcher = Arc::new(Fetcher::from_config(&config)?);
    let crawler = Crawler::new(fetcher, Arc::new(Mutex::new(storage)), config.crawler);

    let result = crawler.crawl(base_url, library, version).await?;
    print_crawl_result(&result);

    if !result.is_successful() {
        bail!("Crawl of {} {} stored nothing", library, version);
    }
    Ok(())
}

/// Handles the stats command
fn handle_stats(config: &Config, library: &str, version: &str) -> anyhow::Result<()> {
    println!("Database: {}\n", config.output.database_path);

    let storage = open_database(config)?;
    let stats = load_version_statistics(&storage, library, version)?;
    print_version_statistics(&stats);

    Ok(())
}

/// Handles the libraries command
fn handle_libraries(config: &Config) -> anyhow::Result<()> {
    let storage = open_database(config)?;
    let libraries = load_library_summaries(&storage)?;
    print_library_summaries(&libraries);
    Ok(())
}

/// Handles the versions command
fn handle_versions(config: &Config, library: &str) -> anyhow::Result<()> {
    let storage = open_database(config)?;
    let resolver = VersionResolver::new(&storage);

    let versions = resolver.get_available_versions(library)?;
    if versions.is_empty() {
        println!("No versions stored for {}", library);
        return Ok(());
    }

    for version in versions {
        let marker = if resolver.is_stable_version(&version) {
            ""
        } else {
            " (pre-release)"
        };
        println!("{}{}", version, marker);
    }
    Ok(())
}

/// Handles the resolve command
fn handle_resolve(config: &Config, library: &str, requested: Option<&str>) -> anyhow::Result<()> {
    let storage = open_database(config)?;
    let resolver = VersionResolver::new(&storage);

    match resolver.resolve_version(library, requested)? {
        Some(version) => {
            println!("{}", version);
            Ok(())
        }
        None => bail!(
            "No stored version of {} matches {}",
            library,
            requested.unwrap_or("latest")
        ),
    }
}

/// Handles the clear command
fn handle_clear(config: &Config, library: &str, version: &str) -> anyhow::Result<()> {
    let mut storage = open_database(config)?;
    let removed = storage.clear_library_version(library, version)?;
    println!("Removed {} packages of {} {}", removed, library, version);
    Ok(())
}

/// Handles the probe command
async fn handle_probe(config: &Config, url: &str) -> anyhow::Result<()> {
    let fetcher = Fetcher::from_config(config)?;
    if fetcher.exists(url).await {
        println!("{} exists", url);
        Ok(())
    } else {
        bail!("{} is not reachable", url)
    }
}
