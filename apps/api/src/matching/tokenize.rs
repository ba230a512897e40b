//! Word tokenization and suffix-stripping stemming shared by ATS scoring and
//! JD profile extraction.

use std::collections::HashSet;

use rust_stemmers::{Algorithm, Stemmer};

/// Common English stopwords excluded from required-skill extraction.
const STOPWORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "all", "and", "any", "are", "because", "been",
    "before", "being", "below", "between", "both", "but", "can", "could", "did", "does", "doing",
    "down", "during", "each", "few", "for", "from", "further", "had", "has", "have", "having",
    "her", "here", "hers", "herself", "him", "himself", "his", "how", "into", "its", "itself",
    "just", "more", "most", "myself", "nor", "not", "now", "off", "once", "only", "other", "our",
    "ours", "ourselves", "out", "over", "own", "same", "she", "should", "some", "such", "than",
    "that", "the", "their", "theirs", "them", "themselves", "then", "there", "these", "they",
    "this", "those", "through", "too", "under", "until", "very", "was", "were", "what", "when",
    "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you", "your",
    "yours", "yourself", "yourselves",
];

/// Splits text into lowercase alphanumeric word tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reduces tokens to their stems (Snowball English, Porter-class suffix
/// stripping: "developing" and "developed" share a stem).
pub fn stem_tokens(tokens: &[String]) -> Vec<String> {
    let stemmer = Stemmer::create(Algorithm::English);
    tokens
        .iter()
        .map(|token| stemmer.stem(token).into_owned())
        .collect()
}

/// Stems of `text` in first-occurrence order, duplicates removed.
pub fn unique_stems(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    stem_tokens(&tokenize(text))
        .into_iter()
        .filter(|stem| seen.insert(stem.clone()))
        .collect()
}

pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(&word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_on_punctuation_and_folds_case() {
        assert_eq!(
            tokenize("React, Node.js & SQL!"),
            vec!["react", "node", "js", "sql"]
        );
    }

    #[test]
    fn test_tokenize_keeps_digits() {
        assert_eq!(tokenize("5+ years"), vec!["5", "years"]);
    }

    #[test]
    fn test_tokenize_empty_and_symbol_only_text() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("!!! --- ???").is_empty());
    }

    #[test]
    fn test_inflections_share_a_stem() {
        let stems = stem_tokens(&tokenize("developing developed develops"));
        assert_eq!(stems[0], stems[1]);
        assert_eq!(stems[1], stems[2]);
    }

    #[test]
    fn test_stemming_strips_suffixes() {
        let stems = stem_tokens(&tokenize("running"));
        assert_eq!(stems, vec!["run"]);
    }

    #[test]
    fn test_unique_stems_preserves_first_occurrence_order() {
        let stems = unique_stems("react node react sql node");
        assert_eq!(stems, vec!["react", "node", "sql"]);
    }

    #[test]
    fn test_unique_stems_merges_inflections() {
        // "engineer" and "engineers" reduce to one stem.
        let stems = unique_stems("engineer engineers");
        assert_eq!(stems.len(), 1);
    }

    #[test]
    fn test_stopword_lookup() {
        assert!(is_stopword("with"));
        assert!(is_stopword("their"));
        assert!(!is_stopword("react"));
    }
}
