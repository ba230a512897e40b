use std::sync::Arc;

use crate::analysis::analyzer::DocumentAnalyzer;
use crate::config::Config;
use crate::store::CandidateStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Compiled analyzer (keyword table + link patterns). Built once at
    /// startup; requests share it read-only.
    pub analyzer: Arc<DocumentAnalyzer>,
    /// Pluggable candidate store. Default: InMemoryCandidateStore.
    pub candidates: Arc<dyn CandidateStore>,
}
