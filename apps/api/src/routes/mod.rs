pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::matching::handlers as matching_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Document analysis API
        .route(
            "/api/v1/documents/analyze",
            post(analysis_handlers::handle_analyze_upload),
        )
        .route(
            "/api/v1/documents/analyze-text",
            post(analysis_handlers::handle_analyze_text),
        )
        // Job matching API
        .route(
            "/api/v1/jobs/profile",
            post(matching_handlers::handle_jd_profile),
        )
        .route("/api/v1/jobs/match", post(matching_handlers::handle_match))
        // Candidate API
        .route(
            "/api/v1/candidates",
            get(matching_handlers::handle_list_candidates)
                .post(matching_handlers::handle_create_candidate),
        )
        .route(
            "/api/v1/candidates/:id",
            get(matching_handlers::handle_get_candidate),
        )
        .route(
            "/api/v1/candidates/rank",
            post(matching_handlers::handle_rank_candidates),
        )
        .layer(body_limit)
        .with_state(state)
}
