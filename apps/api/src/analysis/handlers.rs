//! Axum route handlers for the Document Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::analyzer::AnalysisResult;
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::matching::tokenize::tokenize;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeTextResponse {
    pub analysis: AnalysisResult,
}

#[derive(Debug, Serialize)]
pub struct UploadAnalysisResponse {
    pub file_id: Uuid,
    pub original_name: String,
    pub word_count: usize,
    pub analysis: AnalysisResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/documents/analyze
///
/// Multipart upload of a single resume document (`file` field). Extracts text,
/// then runs category, link, and overall-match analysis. Extraction failures
/// abort the request before any scoring happens.
pub async fn handle_analyze_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadAnalysisResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("file") {
            let original_name = field.file_name().unwrap_or("resume").to_string();
            let data = field.bytes().await?;
            upload = Some((original_name, data));
        }
    }

    let (original_name, data) = upload.ok_or_else(|| {
        AppError::Validation("multipart field 'file' is required".to_string())
    })?;

    let text = extract_text(&original_name, &data)?;
    let analysis = state.analyzer.analyze(&text);
    let word_count = tokenize(&text).len();

    tracing::info!(file = %original_name, word_count, "analyzed uploaded resume");

    Ok(Json(UploadAnalysisResponse {
        file_id: Uuid::new_v4(),
        original_name,
        word_count,
        analysis,
    }))
}

/// POST /api/v1/documents/analyze-text
///
/// Analyzes already-extracted text. This is the library surface over HTTP:
/// input is a string, output the plain analysis record.
pub async fn handle_analyze_text(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeTextRequest>,
) -> Result<Json<AnalyzeTextResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let analysis = state.analyzer.analyze(&request.text);
    Ok(Json(AnalyzeTextResponse { analysis }))
}
