use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Pipeline status of a candidate record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandidateStatus {
    #[default]
    New,
    Reviewed,
    Shortlisted,
    Rejected,
}

/// One candidate as held by the candidate store.
///
/// `links` maps platform name to profile URL, the same shape the analyzer
/// produces for uploaded resumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub links: BTreeMap<String, String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    pub resume_text: String,
    #[serde(default)]
    pub status: CandidateStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_deserializes_with_defaults() {
        let json = r#"{
            "id": "7f9c24e5-2f86-4a5b-9b1f-3d2e8c0a1b2c",
            "name": "Alex Johnson",
            "email": "alex.johnson@example.com",
            "resume_text": "Full-stack developer with 5 years of experience."
        }"#;
        let candidate: Candidate = serde_json::from_str(json).unwrap();
        assert_eq!(candidate.status, CandidateStatus::New);
        assert!(candidate.links.is_empty());
        assert!(candidate.phone.is_none());
    }

    #[test]
    fn test_status_serializes_as_variant_name() {
        let json = serde_json::to_string(&CandidateStatus::Shortlisted).unwrap();
        assert_eq!(json, r#""Shortlisted""#);
    }
}
