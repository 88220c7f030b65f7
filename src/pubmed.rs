//! PubMed E-utilities client.
//!
//! Two calls per run, awaited in sequence:
//! - `esearch.fcgi` resolves a free-text query into ranked PubMed IDs
//! - `esummary.fcgi` fetches summaries for all IDs in one batched request
//!
//! The two calls fail differently. A failed search is returned as an error;
//! a failed summary fetch is logged and yields no records.

use crate::classify::classify;
use crate::config::Config;
use crate::error::{FetcherError, Result};
use crate::paper::{AuthorEntry, PaperRecord, NOT_AVAILABLE};
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error, info, warn};
use url::Url;

/// PubMed E-utilities client
#[derive(Debug, Clone)]
pub struct PubMedClient {
    client: Client,
    config: Config,
    search_url: Url,
    summary_url: Url,
}

impl PubMedClient {
    /// Create a new client. Both requests share `config.request_timeout`.
    pub fn new(config: Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| FetcherError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            search_url: config.search_url()?,
            summary_url: config.summary_url()?,
            config,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolve a query into PubMed IDs, in relevance order.
    ///
    /// The query is sent verbatim. Returns an empty list when nothing
    /// matches; any transport, status or decoding failure is an error.
    pub async fn resolve(&self, query: &str, max_results: u32) -> Result<Vec<String>> {
        info!(query = query, max_results = max_results, "Searching PubMed");

        let retmax = max_results.to_string();
        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[
                ("db", self.config.database.as_str()),
                ("term", query),
                ("retmode", "json"),
                ("retmax", retmax.as_str()),
            ])
            .send()
            .await?;

        let body = read_success_body(response, "esearch").await?;
        let data: ESearchResponse = serde_json::from_str(&body)?;
        let result = data.esearchresult.unwrap_or_default();

        if let Some(message) = &result.error {
            warn!(error = %message, "esearch reported an error");
        }

        debug!(
            total = ?result.count,
            returned = result.idlist.len(),
            "esearch complete"
        );

        Ok(result.idlist)
    }

    /// Fetch summaries for all identifiers in one request.
    ///
    /// This is the fallible half of [`extract_details`](Self::extract_details)
    /// and makes no request for an empty slice.
    pub async fn fetch_summaries(&self, identifiers: &[String]) -> Result<SummaryBatch> {
        if identifiers.is_empty() {
            return Ok(SummaryBatch::default());
        }

        let ids = identifiers.join(",");
        debug!(count = identifiers.len(), ids = %ids, "Fetching summaries");

        let response = self
            .client
            .get(self.summary_url.clone())
            .query(&[
                ("db", self.config.database.as_str()),
                ("id", ids.as_str()),
                ("retmode", "json"),
            ])
            .send()
            .await?;

        let body = read_success_body(response, "esummary").await?;
        SummaryBatch::from_json(&body)
    }

    /// Produce one classified record per identifier, in input order.
    ///
    /// Never fails: if the summary request fails the error is logged and an
    /// empty list is returned, losing the whole batch.
    pub async fn extract_details(&self, identifiers: &[String]) -> Vec<PaperRecord> {
        if identifiers.is_empty() {
            return Vec::new();
        }

        let batch = match self.fetch_summaries(identifiers).await {
            Ok(batch) => batch,
            Err(e) => {
                error!(
                    error = %e,
                    transport = e.is_transport(),
                    count = identifiers.len(),
                    "Error fetching details"
                );
                return Vec::new();
            }
        };

        let records = build_records(identifiers, &batch, &self.config.email_domain);
        info!(
            requested = identifiers.len(),
            found = batch.len(),
            "Extracted paper details"
        );
        records
    }
}

/// Read the body of a response, turning non-success statuses into errors.
async fn read_success_body(response: reqwest::Response, endpoint: &str) -> Result<String> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        warn!(endpoint = endpoint, status = status.as_u16(), error = %error_text, "API error");
        return Err(FetcherError::Api {
            code: status.as_u16(),
            message: format!("{} error: {} - {}", endpoint, status, error_text),
        });
    }

    Ok(response.text().await?)
}

/// Build records for `identifiers` from a summary batch.
///
/// Identifiers missing from the batch get all-sentinel records.
pub fn build_records(
    identifiers: &[String],
    batch: &SummaryBatch,
    email_domain: &str,
) -> Vec<PaperRecord> {
    identifiers
        .iter()
        .map(|id| {
            let doc = batch.document(id);
            let authors: Vec<AuthorEntry> = doc
                .authors
                .unwrap_or_default()
                .into_iter()
                .filter_map(|value| match SummaryAuthor::deserialize(&value) {
                    Ok(a) => Some(AuthorEntry::new(a.name, a.affiliation)),
                    Err(e) => {
                        warn!(id = %id, error = %e, "Skipping malformed author entry");
                        None
                    }
                })
                .collect();
            let classification = classify(&authors, email_domain);

            PaperRecord {
                identifier: id.clone(),
                title: doc.title.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                publication_date: doc.pubdate.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                non_academic_authors: classification.non_academic_authors,
                company_affiliations: classification.company_affiliations,
                corresponding_email: classification.corresponding_email,
            }
        })
        .collect()
}

/// Decoded esummary `result` mapping, keyed by PubMed ID.
#[derive(Debug, Clone, Default)]
pub struct SummaryBatch {
    docs: HashMap<String, serde_json::Value>,
}

impl SummaryBatch {
    /// Parse an esummary JSON body.
    ///
    /// A body without a `result` object decodes to an empty batch. Entries
    /// stay as raw JSON until looked up so one odd document cannot sink the
    /// rest.
    pub fn from_json(body: &str) -> Result<Self> {
        let response: ESummaryResponse = serde_json::from_str(body)?;
        let mut docs = response.result.unwrap_or_default();
        // esummary lists the requested IDs under "uids"; it is not a document
        docs.remove("uids");
        Ok(Self { docs })
    }

    /// Number of documents in the batch.
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    fn document(&self, id: &str) -> SummaryDoc {
        let Some(value) = self.docs.get(id) else {
            debug!(id = id, "No summary for identifier");
            return SummaryDoc::default();
        };

        // Fields decode independently; only a non-object document fails here
        SummaryDoc::deserialize(value).unwrap_or_else(|e| {
            warn!(id = id, error = %e, "Malformed summary document, using placeholders");
            SummaryDoc::default()
        })
    }
}

// === E-utilities Response Types ===

#[derive(Debug, Deserialize)]
struct ESearchResponse {
    #[serde(default)]
    esearchresult: Option<ESearchResult>,
}

#[derive(Debug, Default, Deserialize)]
struct ESearchResult {
    #[serde(default)]
    count: Option<String>,
    #[serde(default)]
    idlist: Vec<String>,
    #[serde(rename = "ERROR", default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ESummaryResponse {
    #[serde(default)]
    result: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Default, Deserialize)]
struct SummaryDoc {
    #[serde(default, deserialize_with = "lenient")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pubdate: Option<String>,
    /// Raw entries, decoded one by one in [`build_records`]
    #[serde(default, deserialize_with = "lenient")]
    authors: Option<Vec<serde_json::Value>>,
}

#[derive(Debug, Deserialize)]
struct SummaryAuthor {
    #[serde(default, deserialize_with = "lenient")]
    name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    affiliation: Option<String>,
}

/// Decode a field, treating a value of the wrong type like an absent one.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}
