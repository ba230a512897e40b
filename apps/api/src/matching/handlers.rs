//! Axum route handlers for the Job Matching and Candidate APIs.

use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::extract_text;
use crate::matching::ats::{compute_ats_score, AtsScore};
use crate::matching::jd_profile::{build_jd_profile, JdProfile};
use crate::matching::ranking::{rank_candidates, RankedCandidate};
use crate::models::candidate::Candidate;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct JobDescriptionRequest {
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct JdProfileResponse {
    pub job_description: JdProfile,
}

#[derive(Debug, Serialize)]
pub struct ScoredResume {
    pub file_id: Uuid,
    pub original_name: String,
    pub ats: AtsScore,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub job_description: JdProfile,
    pub resumes: Vec<ScoredResume>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCandidateRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub links: std::collections::BTreeMap<String, String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: Option<u32>,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct RankResponse {
    pub job_description: JdProfile,
    pub candidates: Vec<RankedCandidate>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/jobs/profile
///
/// Builds the keyword profile for a job description. Useful for previewing
/// what candidates will be matched against.
pub async fn handle_jd_profile(
    Json(request): Json<JobDescriptionRequest>,
) -> Result<Json<JdProfileResponse>, AppError> {
    require_job_description(&request.job_description)?;
    let job_description = build_jd_profile(&request.job_description)?;
    Ok(Json(JdProfileResponse { job_description }))
}

/// POST /api/v1/jobs/match
///
/// Multipart form: a `job_description` text field plus one or more `resumes`
/// files. Each resume is extracted and ATS-scored against the JD; results are
/// returned best-first together with the JD profile.
pub async fn handle_match(mut multipart: Multipart) -> Result<Json<MatchResponse>, AppError> {
    let mut job_description: Option<String> = None;
    let mut files: Vec<(String, Bytes)> = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        // Copy the field name out before consuming the field body.
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("job_description") => job_description = Some(field.text().await?),
            Some("resumes") => {
                let original_name = field.file_name().unwrap_or("resume").to_string();
                files.push((original_name, field.bytes().await?));
            }
            _ => {}
        }
    }

    let job_description = job_description
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| {
            AppError::Validation(
                "job description and at least one resume file are required".to_string(),
            )
        })?;
    if files.is_empty() {
        return Err(AppError::Validation(
            "job description and at least one resume file are required".to_string(),
        ));
    }

    let profile = build_jd_profile(&job_description)?;

    let mut resumes = Vec::with_capacity(files.len());
    for (original_name, data) in files {
        let text = extract_text(&original_name, &data)?;
        let ats = compute_ats_score(&job_description, &text)?;
        resumes.push(ScoredResume {
            file_id: Uuid::new_v4(),
            original_name,
            ats,
        });
    }
    resumes.sort_by(|a, b| b.ats.score.cmp(&a.ats.score));

    tracing::info!(resume_count = resumes.len(), "matched resumes against JD");

    Ok(Json(MatchResponse {
        job_description: profile,
        resumes,
    }))
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<Candidate>>, AppError> {
    Ok(Json(state.candidates.list().await?))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Candidate>, AppError> {
    let candidate = state
        .candidates
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(candidate))
}

/// POST /api/v1/candidates
///
/// Adds a candidate to the store. The resume text must be non-empty so the
/// candidate can later be ranked.
pub async fn handle_create_candidate(
    State(state): State<AppState>,
    Json(request): Json<CreateCandidateRequest>,
) -> Result<(StatusCode, Json<Candidate>), AppError> {
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let candidate = Candidate {
        id: Uuid::new_v4(),
        name: request.name,
        email: request.email,
        phone: request.phone,
        links: request.links,
        skills: request.skills,
        experience_years: request.experience_years,
        resume_text: request.resume_text,
        status: Default::default(),
    };
    state.candidates.insert(candidate.clone()).await?;

    Ok((StatusCode::CREATED, Json(candidate)))
}

/// POST /api/v1/candidates/rank
///
/// Scores every stored candidate against the supplied job description and
/// returns them best-first alongside the JD profile.
pub async fn handle_rank_candidates(
    State(state): State<AppState>,
    Json(request): Json<JobDescriptionRequest>,
) -> Result<Json<RankResponse>, AppError> {
    require_job_description(&request.job_description)?;

    let job_description = build_jd_profile(&request.job_description)?;
    let candidates = state.candidates.list().await?;
    let ranked = rank_candidates(candidates, &request.job_description)?;

    Ok(Json(RankResponse {
        job_description,
        candidates: ranked,
    }))
}

fn require_job_description(jd_text: &str) -> Result<(), AppError> {
    if jd_text.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    Ok(())
}
