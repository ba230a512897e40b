//! Candidate ranking — ATS-scores every stored candidate against one JD.

use serde::Serialize;

use crate::errors::AppError;
use crate::matching::ats::{compute_ats_score, AtsScore};
use crate::models::candidate::Candidate;

/// A candidate paired with its ATS score for one job description.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub candidate: Candidate,
    pub ats: AtsScore,
}

/// Scores each candidate's resume text against the JD and sorts best-first.
///
/// The JD is validated once up front by `compute_ats_score`; a candidate with
/// an empty resume simply scores zero overlap.
pub fn rank_candidates(
    candidates: Vec<Candidate>,
    jd_text: &str,
) -> Result<Vec<RankedCandidate>, AppError> {
    let mut ranked = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let ats = compute_ats_score(jd_text, &candidate.resume_text)?;
        ranked.push(RankedCandidate { candidate, ats });
    }
    ranked.sort_by(|a, b| b.ats.score.cmp(&a.ats.score));
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn candidate(name: &str, resume_text: &str) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            links: Default::default(),
            skills: vec![],
            experience_years: None,
            resume_text: resume_text.to_string(),
            status: Default::default(),
        }
    }

    #[test]
    fn test_stronger_match_ranks_first() {
        let candidates = vec![
            candidate("Weak", "pastry chef, baker"),
            candidate("Strong", "React developer, Node, SQL, 5+ years experience"),
        ];
        let ranked =
            rank_candidates(candidates, "React developer with Node and SQL experience").unwrap();
        assert_eq!(ranked[0].candidate.name, "Strong");
        assert!(ranked[0].ats.score > ranked[1].ats.score);
    }

    #[test]
    fn test_empty_store_ranks_to_empty_list() {
        let ranked = rank_candidates(vec![], "React developer").unwrap();
        assert!(ranked.is_empty());
    }

    #[test]
    fn test_empty_jd_rejected_before_any_candidate_is_scored() {
        let candidates = vec![candidate("Anyone", "React developer")];
        assert!(rank_candidates(candidates, "").is_err());
    }

    #[test]
    fn test_candidate_with_empty_resume_scores_zero_overlap() {
        let ranked = rank_candidates(vec![candidate("Blank", "")], "React developer").unwrap();
        assert_eq!(ranked[0].ats.match_percentage, 0);
    }
}
