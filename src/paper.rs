//! Normalized paper records produced by the detail extractor.

use serde::Serialize;
use std::fmt;

/// Placeholder for fields missing from the source data
pub const NOT_AVAILABLE: &str = "N/A";

/// One author of a paper, with the affiliation at the same position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorEntry {
    pub name: String,
    pub affiliation: String,
}

impl AuthorEntry {
    /// Build an entry, substituting the sentinel for missing values.
    pub fn new(name: Option<String>, affiliation: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            affiliation: affiliation.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        }
    }
}

/// A paper with derived classification fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperRecord {
    /// PubMed identifier
    pub identifier: String,
    /// Title, or "N/A"
    pub title: String,
    /// Publication date as returned by PubMed, or "N/A"
    pub publication_date: String,
    /// Authors whose affiliation looks non-academic
    pub non_academic_authors: Vec<String>,
    /// Affiliations that look like pharma/biotech companies
    pub company_affiliations: Vec<String>,
    /// Synthesized placeholder address, or "N/A"
    pub corresponding_email: String,
}

impl PaperRecord {
    /// CSV row view; list fields are joined with ", ".
    pub fn to_row(&self) -> PaperRow<'_> {
        PaperRow {
            identifier: &self.identifier,
            title: &self.title,
            publication_date: &self.publication_date,
            non_academic_authors: self.non_academic_authors.join(", "),
            company_affiliations: self.company_affiliations.join(", "),
            corresponding_email: &self.corresponding_email,
        }
    }
}

impl fmt::Display for PaperRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PubmedID: {}", self.identifier)?;
        writeln!(f, "  Title: {}", self.title)?;
        writeln!(f, "  Publication Date: {}", self.publication_date)?;
        writeln!(
            f,
            "  Non-academic Author(s): {}",
            self.non_academic_authors.join(", ")
        )?;
        writeln!(
            f,
            "  Company Affiliation(s): {}",
            self.company_affiliations.join(", ")
        )?;
        write!(f, "  Corresponding Author Email: {}", self.corresponding_email)
    }
}

/// Flat serialization shape of a [`PaperRecord`]; field names become CSV headers.
#[derive(Debug, Serialize)]
pub struct PaperRow<'a> {
    #[serde(rename = "PubmedID")]
    pub identifier: &'a str,
    #[serde(rename = "Title")]
    pub title: &'a str,
    #[serde(rename = "Publication Date")]
    pub publication_date: &'a str,
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PaperRecord {
        PaperRecord {
            identifier: "111".to_string(),
            title: "Checkpoint blockade".to_string(),
            publication_date: "2023 Jun".to_string(),
            non_academic_authors: vec!["Jane Roe".to_string(), "John Doe".to_string()],
            company_affiliations: vec!["Acme Pharma".to_string()],
            corresponding_email: "jane.roe@company.com".to_string(),
        }
    }

    #[test]
    fn test_author_entry_sentinels() {
        let entry = AuthorEntry::new(None, None);
        assert_eq!(entry.name, "N/A");
        assert_eq!(entry.affiliation, "N/A");

        let entry = AuthorEntry::new(Some("Smith J".to_string()), None);
        assert_eq!(entry.name, "Smith J");
        assert_eq!(entry.affiliation, "N/A");
    }

    #[test]
    fn test_row_joins_lists() {
        let record = sample();
        let row = record.to_row();
        assert_eq!(row.non_academic_authors, "Jane Roe, John Doe");
        assert_eq!(row.company_affiliations, "Acme Pharma");
        assert_eq!(row.identifier, "111");
    }

    #[test]
    fn test_display() {
        let text = sample().to_string();
        assert!(text.starts_with("PubmedID: 111\n"));
        assert!(text.contains("  Non-academic Author(s): Jane Roe, John Doe\n"));
        assert!(text.ends_with("Corresponding Author Email: jane.roe@company.com"));
    }
}
