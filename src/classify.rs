//! Affiliation heuristics.
//!
//! Plain case-insensitive substring tests. An affiliation that merely
//! contains "lab" (e.g. "Collaborative Care Ltd") still counts as academic.

use crate::paper::{AuthorEntry, NOT_AVAILABLE};

/// Markers of an academic affiliation
const ACADEMIC_MARKERS: &[&str] = &["university", "lab"];

/// Markers of a company affiliation
const COMPANY_MARKERS: &[&str] = &["pharma", "biotech"];

/// Derived fields for one paper's author list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub non_academic_authors: Vec<String>,
    pub company_affiliations: Vec<String>,
    pub corresponding_email: String,
}

/// An affiliation is non-academic when it mentions neither marker.
pub fn is_non_academic(affiliation: &str) -> bool {
    let lower = affiliation.to_lowercase();
    !ACADEMIC_MARKERS.iter().any(|m| lower.contains(m))
}

pub fn is_company_affiliation(affiliation: &str) -> bool {
    let lower = affiliation.to_lowercase();
    COMPANY_MARKERS.iter().any(|m| lower.contains(m))
}

/// Synthesize a corresponding-author address from an author name.
///
/// PubMed summaries carry no email field, so this is a fabricated
/// placeholder ("John Smith" -> "john.smith@company.com"), not extracted
/// contact data. Returns "N/A" when there is no author to derive from.
pub fn placeholder_email(first_author: Option<&str>, domain: &str) -> String {
    match first_author {
        Some(name) => format!("{}@{}", name.replace(' ', ".").to_lowercase(), domain),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Classify a paper's authors.
///
/// The two predicates are independent: names are filtered by the
/// non-academic test, affiliations by the company test, both over the full
/// author list.
pub fn classify(authors: &[AuthorEntry], email_domain: &str) -> Classification {
    let non_academic_authors: Vec<String> = authors
        .iter()
        .filter(|a| is_non_academic(&a.affiliation))
        .map(|a| a.name.clone())
        .collect();

    let company_affiliations = authors
        .iter()
        .filter(|a| is_company_affiliation(&a.affiliation))
        .map(|a| a.affiliation.clone())
        .collect();

    let corresponding_email = placeholder_email(
        non_academic_authors.first().map(String::as_str),
        email_domain,
    );

    Classification {
        non_academic_authors,
        company_affiliations,
        corresponding_email,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(name: &str, affiliation: &str) -> AuthorEntry {
        AuthorEntry {
            name: name.to_string(),
            affiliation: affiliation.to_string(),
        }
    }

    #[test]
    fn test_mixed_author_list() {
        let authors = vec![
            author("A", "MIT Lab"),
            author("B", "Acme Pharma Inc"),
            author("C", "Unaffiliated"),
        ];

        let result = classify(&authors, "company.com");
        assert_eq!(result.non_academic_authors, vec!["B", "C"]);
        assert_eq!(result.company_affiliations, vec!["Acme Pharma Inc"]);
        assert_eq!(result.corresponding_email, "b@company.com");
    }

    #[test]
    fn test_case_insensitive_markers() {
        assert!(!is_non_academic("Stanford UNIVERSITY"));
        assert!(!is_non_academic("Broad Institute LABORATORY"));
        assert!(is_company_affiliation("GENENTECH BIOTECH"));
        assert!(is_company_affiliation("novartis pharmaceuticals"));
        assert!(!is_company_affiliation("Mayo Clinic"));
    }

    #[test]
    fn test_incidental_lab_substring_counts_as_academic() {
        // "Collaborative" contains "lab"
        assert!(!is_non_academic("Collaborative Pharma Partners"));

        let authors = vec![author("D", "Collaborative Pharma Partners")];
        let result = classify(&authors, "company.com");
        assert!(result.non_academic_authors.is_empty());
        assert_eq!(result.company_affiliations, vec!["Collaborative Pharma Partners"]);
        assert_eq!(result.corresponding_email, "N/A");
    }

    #[test]
    fn test_missing_affiliation_is_non_academic() {
        let authors = vec![AuthorEntry::new(Some("Smith J".to_string()), None)];
        let result = classify(&authors, "company.com");
        assert_eq!(result.non_academic_authors, vec!["Smith J"]);
        assert!(result.company_affiliations.is_empty());
        assert_eq!(result.corresponding_email, "smith.j@company.com");
    }

    #[test]
    fn test_placeholder_email() {
        assert_eq!(
            placeholder_email(Some("John Smith"), "company.com"),
            "john.smith@company.com"
        );
        assert_eq!(placeholder_email(None, "company.com"), "N/A");
    }

    #[test]
    fn test_empty_author_list() {
        let result = classify(&[], "company.com");
        assert_eq!(result, Classification {
            corresponding_email: "N/A".to_string(),
            ..Default::default()
        });
    }
}
