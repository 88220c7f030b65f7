//! # pubmed-paper-fetcher
//!
//! Fetch PubMed papers for a query and flag non-academic authors and
//! pharma/biotech affiliations.
//!
//! ## Modules
//!
//! - [`pubmed`] - E-utilities client (search + batched summary lookup)
//! - [`classify`] - Affiliation heuristics
//! - [`paper`] - Output records
//! - [`export`] - CSV and console output
//! - [`config`] - Endpoint and timeout configuration
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pubmed_paper_fetcher::{Config, PubMedClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PubMedClient::new(Config::default())?;
//!     let ids = client.resolve("cancer immunotherapy", 10).await?;
//!     let papers = client.extract_details(&ids).await;
//!     println!("Found {} papers", papers.len());
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod export;
pub mod paper;
pub mod pubmed;

pub use config::Config;
pub use error::{FetcherError, Result};
pub use paper::{AuthorEntry, PaperRecord};
pub use pubmed::PubMedClient;
