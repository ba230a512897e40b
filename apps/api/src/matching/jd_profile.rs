//! JD keyword profile — a structured summary of a job description used by the
//! dashboard alongside candidate scores.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::tokenize::{is_stopword, unique_stems};

const MAX_KEYWORDS: usize = 15;
const MAX_REQUIRED_SKILLS: usize = 10;

/// Seniority signal read from the JD text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Senior,
    Junior,
    #[serde(rename = "Mid-level")]
    MidLevel,
}

/// Structured profile of one job description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JdProfile {
    /// Top stems in first-occurrence order, at most 15.
    pub keywords: Vec<String>,
    /// Stems longer than 3 chars that are not stopwords, at most 10.
    pub required_skills: Vec<String>,
    pub experience_level: ExperienceLevel,
}

/// Builds the profile for a job description.
///
/// A JD that yields no word tokens is a validation error, mirroring the ATS
/// scoring precondition.
pub fn build_jd_profile(jd_text: &str) -> Result<JdProfile, AppError> {
    let stems = unique_stems(jd_text);
    if stems.is_empty() {
        return Err(AppError::Validation(
            "job description contains no scorable words".to_string(),
        ));
    }

    let keywords: Vec<String> = stems.iter().take(MAX_KEYWORDS).cloned().collect();
    let required_skills: Vec<String> = stems
        .iter()
        .filter(|stem| stem.len() > 3 && !is_stopword(stem))
        .take(MAX_REQUIRED_SKILLS)
        .cloned()
        .collect();

    let jd_lower = jd_text.to_lowercase();
    let experience_level = if jd_lower.contains("senior") {
        ExperienceLevel::Senior
    } else if jd_lower.contains("junior") {
        ExperienceLevel::Junior
    } else {
        ExperienceLevel::MidLevel
    };

    Ok(JdProfile {
        keywords,
        required_skills,
        experience_level,
    })
}
