//! Keyword-overlap scoring, the fallback ranking when embeddings are unavailable.

use regex::Regex;
use std::sync::OnceLock;

fn separators() -> &'static Regex {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    SEPARATORS.get_or_init(|| Regex::new(r"[^A-Za-z0-9_]+").expect("valid regex"))
}

/// Lowercased query terms, split on runs of non-word characters
///
/// Duplicate terms are kept and count once each when scoring.
pub fn query_terms(query: &str) -> Vec<String> {
    let query = query.to_lowercase();
    separators()
        .split(&query)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

/// Number of terms occurring as a substring of the lowercased content
pub fn keyword_score(terms: &[String], content: &str) -> usize {
    let content = content.to_lowercase();
    terms
        .iter()
        .filter(|term| content.contains(term.as_str()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_terms() {
        assert_eq!(
            query_terms("Beach, resorts & SUNSET-views!"),
            vec!["beach", "resorts", "sunset", "views"]
        );
        assert!(query_terms("  ?! ").is_empty());
        assert_eq!(query_terms("snake_case 42"), vec!["snake_case", "42"]);
    }

    #[test]
    fn test_non_ascii_letters_split() {
        assert_eq!(query_terms("rivière noire"), vec!["rivi", "re", "noire"]);
    }

    #[test]
    fn test_keyword_score_counts_substrings() {
        let terms = query_terms("resort north pool");
        assert_eq!(keyword_score(&terms, "Beach RESORTS in the North"), 2);
        assert_eq!(keyword_score(&terms, "Hiking trail"), 0);
    }

    #[test]
    fn test_duplicate_terms_each_count() {
        let terms = query_terms("beach beach");
        assert_eq!(keyword_score(&terms, "beach"), 2);
    }
}
