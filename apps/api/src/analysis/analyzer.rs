//! The document analyzer: one compiled, reusable unit combining the category
//! keyword table and the link patterns.
//!
//! Built once at startup and shared read-only across requests. `analyze` is
//! pure and synchronous: identical input always yields identical output.

use std::collections::BTreeMap;

use anyhow::{bail, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::categories::{
    analyze_categories, overall_match, CategoryResult, KeywordCategory,
};
use crate::analysis::links::{extract_links, LinkPattern};

/// Uncompiled analyzer configuration: the keyword table plus link patterns as
/// regex source strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    pub categories: Vec<KeywordCategory>,
    pub link_patterns: Vec<LinkPatternConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkPatternConfig {
    pub platform: String,
    pub pattern: String,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        fn category(name: &str, keywords: &[&str]) -> KeywordCategory {
            KeywordCategory {
                name: name.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            }
        }
        fn link(platform: &str, pattern: &str) -> LinkPatternConfig {
            LinkPatternConfig {
                platform: platform.to_string(),
                pattern: pattern.to_string(),
            }
        }

        Self {
            categories: vec![
                category(
                    "technical",
                    &["javascript", "python", "java", "react", "node", "express", "mongodb", "sql"],
                ),
                category(
                    "education",
                    &["bachelor", "master", "phd", "degree", "university", "college"],
                ),
                category(
                    "experience",
                    &["experience", "worked", "developer", "engineer", "years"],
                ),
                category(
                    "projects",
                    &["project", "built", "developed", "created", "implemented"],
                ),
            ],
            link_patterns: vec![
                link("github", r"github\.com/[a-zA-Z0-9-]+"),
                link("linkedin", r"linkedin\.com/in/[a-zA-Z0-9-]+"),
                link("leetcode", r"leetcode\.com/[a-zA-Z0-9-]+"),
                link("portfolio", r"(https?://)?[a-zA-Z0-9-]+\.(com|io|dev|net)/?"),
            ],
        }
    }
}

/// Full analysis of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub overall_match_percentage: f64,
    pub category_analysis: BTreeMap<String, CategoryResult>,
    pub links_found: BTreeMap<String, String>,
}

/// Compiled analyzer. Construction validates the configuration; a bad table
/// can never surface as a division error mid-request.
#[derive(Debug)]
pub struct DocumentAnalyzer {
    categories: Vec<KeywordCategory>,
    link_patterns: Vec<LinkPattern>,
}

impl DocumentAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        if config.categories.is_empty() {
            bail!("analyzer config has no keyword categories");
        }
        for category in &config.categories {
            if category.keywords.is_empty() {
                bail!("keyword category '{}' has no keywords", category.name);
            }
        }

        // Keywords are matched against lowercased text, so fold them here once.
        let categories = config
            .categories
            .into_iter()
            .map(|c| KeywordCategory {
                name: c.name,
                keywords: c.keywords.into_iter().map(|k| k.to_lowercase()).collect(),
            })
            .collect();

        let mut link_patterns = Vec::with_capacity(config.link_patterns.len());
        for p in config.link_patterns {
            let pattern = Regex::new(&p.pattern)
                .with_context(|| format!("invalid link pattern for platform '{}'", p.platform))?;
            link_patterns.push(LinkPattern {
                platform: p.platform,
                pattern,
            });
        }

        Ok(Self {
            categories,
            link_patterns,
        })
    }

    /// Analyzes one document's extracted text.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let category_analysis = analyze_categories(text, &self.categories);
        let overall_match_percentage = overall_match(&category_analysis);
        let links_found = extract_links(text, &self.link_patterns);

        AnalysisResult {
            overall_match_percentage,
            category_analysis,
            links_found,
        }
    }
}
