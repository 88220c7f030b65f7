//! Client configuration for the PubMed E-utilities endpoints.

use crate::error::{FetcherError, Result};
use std::time::Duration;
use url::Url;

/// Public NCBI E-utilities base URL
pub const EUTILS_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils/";

/// Database selector sent with every request
pub const PUBMED_DB: &str = "pubmed";

/// Default cap on identifiers requested from esearch
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Request timeout shared by the search and summary calls
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Domain appended to synthesized corresponding-author addresses
pub const PLACEHOLDER_EMAIL_DOMAIN: &str = "company.com";

const USER_AGENT: &str = concat!("pubmed-paper-fetcher/", env!("CARGO_PKG_VERSION"));

/// Fetcher configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// E-utilities base URL (overridable for mock servers).
    pub base_url: String,

    /// Database selector (`db` parameter).
    pub database: String,

    /// Default `retmax` for searches.
    pub max_results: u32,

    /// Per-request timeout.
    pub request_timeout: Duration,

    /// Domain used for placeholder corresponding-author emails.
    pub email_domain: String,

    /// User agent sent with requests.
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: EUTILS_BASE_URL.to_string(),
            database: PUBMED_DB.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            request_timeout: REQUEST_TIMEOUT,
            email_domain: PLACEHOLDER_EMAIL_DOMAIN.to_string(),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Configuration pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            ..Self::default()
        }
    }

    /// Full URL of the esearch endpoint.
    pub fn search_url(&self) -> Result<Url> {
        self.endpoint("esearch.fcgi")
    }

    /// Full URL of the esummary endpoint.
    pub fn summary_url(&self) -> Result<Url> {
        self.endpoint("esummary.fcgi")
    }

    fn endpoint(&self, name: &str) -> Result<Url> {
        // Url::join drops the last path segment unless the base ends in '/'
        let base = if self.base_url.ends_with('/') {
            Url::parse(&self.base_url)
        } else {
            Url::parse(&format!("{}/", self.base_url))
        }
        .map_err(|e| FetcherError::Config(format!("Invalid base URL {:?}: {}", self.base_url, e)))?;

        base.join(name)
            .map_err(|e| FetcherError::Config(format!("Invalid endpoint {}: {}", name, e)))
    }
}
