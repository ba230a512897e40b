//! Keyword category coverage — the per-category half of the document analyzer.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named list of lowercase keywords checked against document text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordCategory {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Coverage of one keyword category within a document.
///
/// `found` and `missing` partition the category's keyword list: every keyword
/// appears in exactly one of the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// 100 * |found| / |keywords|, rounded to 2 decimal places.
    pub percentage: f64,
    pub found: Vec<String>,
    pub missing: Vec<String>,
}

/// Computes case-insensitive substring coverage for each category.
///
/// Substring containment (not word-boundary matching) is deliberate:
/// "javascript" also matches inside "javascript-heavy". Categories must have a
/// non-empty keyword list; `DocumentAnalyzer::new` enforces this before any
/// request reaches here.
pub fn analyze_categories(
    text: &str,
    categories: &[KeywordCategory],
) -> BTreeMap<String, CategoryResult> {
    let haystack = text.to_lowercase();
    let mut results = BTreeMap::new();

    for category in categories {
        let (found, missing): (Vec<String>, Vec<String>) = category
            .keywords
            .iter()
            .cloned()
            .partition(|keyword| haystack.contains(keyword.as_str()));

        let percentage = round2(100.0 * found.len() as f64 / category.keywords.len() as f64);

        results.insert(
            category.name.clone(),
            CategoryResult {
                percentage,
                found,
                missing,
            },
        );
    }

    results
}

/// Aggregate coverage across all categories, weighted by keyword count.
///
/// found / total over the whole keyword table, NOT the mean of per-category
/// percentages: a category with more keywords weighs more.
pub fn overall_match(results: &BTreeMap<String, CategoryResult>) -> f64 {
    let found: usize = results.values().map(|r| r.found.len()).sum();
    let total: usize = results
        .values()
        .map(|r| r.found.len() + r.missing.len())
        .sum();

    if total == 0 {
        return 0.0;
    }
    round2(100.0 * found as f64 / total as f64)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, keywords: &[&str]) -> KeywordCategory {
        KeywordCategory {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn test_found_and_missing_partition_the_keyword_list() {
        let categories = vec![category("technical", &["react", "python", "sql"])];
        let results = analyze_categories("Built dashboards in React and SQL", &categories);

        let r = &results["technical"];
        let mut all: Vec<String> = r.found.iter().chain(r.missing.iter()).cloned().collect();
        all.sort();
        assert_eq!(all, vec!["python", "react", "sql"]);
        assert!(r.found.iter().all(|k| !r.missing.contains(k)));
    }

    #[test]
    fn test_substring_containment_matches_inside_longer_words() {
        let categories = vec![category("technical", &["javascript"])];
        let results = analyze_categories("A javascript-heavy frontend codebase", &categories);
        assert_eq!(results["technical"].found, vec!["javascript"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let categories = vec![category("education", &["bachelor", "university"])];
        let results = analyze_categories("BACHELOR of Science, Example University", &categories);
        assert_eq!(results["education"].percentage, 100.0);
    }

    #[test]
    fn test_percentage_rounds_to_two_decimals() {
        // 1 of 3 keywords = 33.333...% → 33.33
        let categories = vec![category("technical", &["react", "python", "sql"])];
        let results = analyze_categories("react only", &categories);
        assert_eq!(results["technical"].percentage, 33.33);
    }

    #[test]
    fn test_no_matches_gives_zero_percentage() {
        let categories = vec![category("projects", &["built", "developed"])];
        let results = analyze_categories("nothing relevant here", &categories);
        let r = &results["projects"];
        assert_eq!(r.percentage, 0.0);
        assert!(r.found.is_empty());
        assert_eq!(r.missing.len(), 2);
    }

    #[test]
    fn test_overall_match_is_weighted_not_averaged() {
        // Category A: 1 of 2 found (50%), category B: 0 of 8 found (0%).
        // Aggregate = 1/10 = 10.00, not (50 + 0) / 2 = 25.
        let categories = vec![
            category("a", &["react", "python"]),
            category(
                "b",
                &["ada", "cobol", "fortran", "prolog", "lisp", "forth", "apl", "simula"],
            ),
        ];
        let results = analyze_categories("react developer", &categories);
        assert_eq!(overall_match(&results), 10.0);
    }

    #[test]
    fn test_overall_match_full_coverage_is_100() {
        let categories = vec![category("a", &["react"]), category("b", &["sql", "java"])];
        let results = analyze_categories("react java sql", &categories);
        assert_eq!(overall_match(&results), 100.0);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let categories = vec![category("experience", &["worked", "engineer", "years"])];
        let text = "Worked 4 years as an engineer";
        assert_eq!(
            analyze_categories(text, &categories),
            analyze_categories(text, &categories)
        );
    }

    #[test]
    fn test_empty_text_leaves_everything_missing() {
        let categories = vec![category("technical", &["react", "sql"])];
        let results = analyze_categories("", &categories);
        let r = &results["technical"];
        assert!(r.found.is_empty());
        assert_eq!(r.missing.len(), 2);
        assert_eq!(r.percentage, 0.0);
    }
}
