//! Profile link detection — github/linkedin/leetcode/portfolio URLs in resume text.

use std::collections::BTreeMap;

use regex::Regex;

/// A compiled detection pattern for one platform.
#[derive(Debug, Clone)]
pub struct LinkPattern {
    pub platform: String,
    pub pattern: Regex,
}

/// Scans for the first match per platform and normalizes it to an `https://`
/// prefix when the match carries no scheme.
///
/// Platforms with no match are absent from the result. Patterns are evaluated
/// independently: the broad portfolio pattern may report the same URL a more
/// specific pattern already claimed. Overlaps are accepted, not deduplicated.
pub fn extract_links(text: &str, patterns: &[LinkPattern]) -> BTreeMap<String, String> {
    let mut links = BTreeMap::new();

    for LinkPattern { platform, pattern } in patterns {
        if let Some(m) = pattern.find(text) {
            let matched = m.as_str();
            let url = if matched.starts_with("http") {
                matched.to_string()
            } else {
                format!("https://{matched}")
            };
            links.insert(platform.clone(), url);
        }
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns() -> Vec<LinkPattern> {
        [
            ("github", r"github\.com/[a-zA-Z0-9-]+"),
            ("linkedin", r"linkedin\.com/in/[a-zA-Z0-9-]+"),
            ("leetcode", r"leetcode\.com/[a-zA-Z0-9-]+"),
            ("portfolio", r"(https?://)?[a-zA-Z0-9-]+\.(com|io|dev|net)/?"),
        ]
        .iter()
        .map(|(platform, pattern)| LinkPattern {
            platform: platform.to_string(),
            pattern: Regex::new(pattern).unwrap(),
        })
        .collect()
    }

    #[test]
    fn test_extracts_github_and_linkedin_with_https_prefix() {
        let links = extract_links(
            "see github.com/alice and linkedin.com/in/alice",
            &patterns(),
        );
        assert_eq!(links["github"], "https://github.com/alice");
        assert_eq!(links["linkedin"], "https://linkedin.com/in/alice");
    }

    #[test]
    fn test_existing_scheme_is_not_double_prefixed() {
        let links = extract_links("portfolio at https://alice.dev/", &patterns());
        assert_eq!(links["portfolio"], "https://alice.dev/");
    }

    #[test]
    fn test_no_urls_yields_empty_mapping() {
        let links = extract_links("plain resume text with no links at all", &patterns());
        assert!(links.is_empty());
    }

    #[test]
    fn test_first_match_wins_per_platform() {
        let links = extract_links(
            "github.com/first and also github.com/second",
            &patterns(),
        );
        assert_eq!(links["github"], "https://github.com/first");
    }

    #[test]
    fn test_portfolio_pattern_overlaps_specific_platforms() {
        // The broad portfolio pattern also matches github.com; accepted behavior.
        let links = extract_links("code at github.com/alice", &patterns());
        assert_eq!(links["github"], "https://github.com/alice");
        assert_eq!(links["portfolio"], "https://github.com/");
    }

    #[test]
    fn test_leetcode_profile_detected() {
        let links = extract_links("practice: leetcode.com/alice-w", &patterns());
        assert_eq!(links["leetcode"], "https://leetcode.com/alice-w");
    }
}
