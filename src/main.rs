//! get-papers-list - fetch PubMed papers with non-academic authors
//!
//! ## Usage
//!
//! ```bash
//! get-papers-list "cancer immunotherapy" --file results.csv --debug
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use pubmed_paper_fetcher::config::{DEFAULT_MAX_RESULTS, EUTILS_BASE_URL};
use pubmed_paper_fetcher::{export, Config, PubMedClient};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, Level};
use tracing_subscriber::{fmt, EnvFilter};

// ============================================================================
// CLI Definition
// ============================================================================

/// Fetch research papers from PubMed and flag non-academic authors
#[derive(Debug, Parser)]
#[command(name = "get-papers-list")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Query to search for papers on PubMed
    query: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Save results to this CSV file instead of printing them
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Maximum number of papers to fetch
    #[arg(long, env = "PUBMED_MAX_RESULTS", default_value_t = DEFAULT_MAX_RESULTS)]
    max_results: u32,

    /// E-utilities base URL
    #[arg(long, env = "PUBMED_EUTILS_URL", default_value = EUTILS_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            base_url: self.base_url.clone(),
            max_results: self.max_results,
            request_timeout: Duration::from_secs(self.timeout),
            ..Config::default()
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr, so printed records stay on stdout)
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .init();

    debug!(query = %cli.query, file = ?cli.file, "Debug mode enabled");

    run(cli).await
}

async fn run(cli: Cli) -> Result<()> {
    let client = PubMedClient::new(cli.config()).context("Failed to create PubMed client")?;

    info!(query = %cli.query, "Fetching papers");

    let paper_ids = client
        .resolve(&cli.query, client.config().max_results)
        .await
        .context("PubMed search failed")?;

    if paper_ids.is_empty() {
        println!("No papers found.");
        return Ok(());
    }

    // Empty here means the detail fetch failed; the error is already logged
    let papers = client.extract_details(&paper_ids).await;

    match &cli.file {
        Some(path) => {
            let written = export::save_csv(path, &papers)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            if written {
                println!("Papers saved to {}", path.display());
            } else {
                println!("No papers to save.");
            }
        }
        None if papers.is_empty() => println!("No papers found."),
        None => {
            export::print_papers(std::io::stdout().lock(), &papers)
                .context("Failed to print papers")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_query_is_usage_error() {
        let err = Cli::try_parse_from(["get-papers-list"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "get-papers-list",
            "cancer immunotherapy",
            "-d",
            "-f",
            "out.csv",
            "--max-results",
            "25",
        ])
        .unwrap();

        assert_eq!(cli.query, "cancer immunotherapy");
        assert!(cli.debug);
        assert_eq!(cli.file, Some(PathBuf::from("out.csv")));

        let config = cli.config();
        assert_eq!(config.max_results, 25);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
