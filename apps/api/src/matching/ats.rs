//! ATS scoring — stemmed-token overlap between a job description and a resume.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::tokenize::{stem_tokens, tokenize, unique_stems};

const SKILLS_BONUS: u32 = 5;
const MAX_EXPERIENCE_BONUS: u32 = 10;

/// ATS score with its bonus breakdown. `score` is the capped final value;
/// the components are reported for transparency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtsScore {
    pub score: u32,
    pub match_percentage: u32,
    pub skills_bonus: u32,
    pub experience_bonus: u32,
}

/// Scores one resume against a job description.
///
/// `match_percentage` is the share of unique JD stems found anywhere in the
/// resume's stems, rounded and capped at 100. A "skills" mention adds +5; a
/// stated "<N>+ years" figure adds 2 points per year up to +10. The final
/// score is capped at 100.
///
/// A job description that yields no word tokens is a validation error; the
/// divide-by-zero case is rejected up front instead of surfacing mid-request.
pub fn compute_ats_score(jd_text: &str, resume_text: &str) -> Result<AtsScore, AppError> {
    let jd_stems = unique_stems(jd_text);
    if jd_stems.is_empty() {
        return Err(AppError::Validation(
            "job description contains no scorable words".to_string(),
        ));
    }

    let resume_stems: HashSet<String> = stem_tokens(&tokenize(resume_text)).into_iter().collect();
    let matches = jd_stems
        .iter()
        .filter(|stem| resume_stems.contains(stem.as_str()))
        .count();

    let match_percentage =
        (((matches as f64 / jd_stems.len() as f64) * 100.0).round() as u32).min(100);

    let skills_bonus = if resume_text.to_lowercase().contains("skills") {
        SKILLS_BONUS
    } else {
        0
    };
    let experience_bonus = stated_years(resume_text)
        .map(|years| years.saturating_mul(2).min(u64::from(MAX_EXPERIENCE_BONUS)) as u32)
        .unwrap_or(0);

    let score = (match_percentage + skills_bonus + experience_bonus).min(100);

    Ok(AtsScore {
        score,
        match_percentage,
        skills_bonus,
        experience_bonus,
    })
}

/// First "<N>+ years" / "<N> year" figure stated in the text, if any.
fn stated_years(text: &str) -> Option<u64> {
    static YEARS: OnceLock<Regex> = OnceLock::new();
    let pattern = YEARS.get_or_init(|| {
        Regex::new(r"(?i)(\d+)\+?\s*years?").expect("years pattern is a valid regex")
    });
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u64>().ok())
}
