//! Candidate store — the boundary to the candidate database.
//!
//! Only the in-memory implementation ships here; a real deployment would back
//! the trait with a database. Carried in `AppState` as `Arc<dyn CandidateStore>`.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::Candidate;

/// The candidate store seam. Implement this to swap the backing store without
/// touching handlers or ranking code.
#[async_trait]
pub trait CandidateStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Candidate>, AppError>;
    async fn get(&self, id: Uuid) -> Result<Option<Candidate>, AppError>;
    async fn insert(&self, candidate: Candidate) -> Result<(), AppError>;
}

/// In-memory store. Contents live for the process lifetime only.
#[derive(Default)]
pub struct InMemoryCandidateStore {
    candidates: RwLock<Vec<Candidate>>,
}

impl InMemoryCandidateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CandidateStore for InMemoryCandidateStore {
    async fn list(&self) -> Result<Vec<Candidate>, AppError> {
        Ok(self.candidates.read().await.clone())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Candidate>, AppError> {
        Ok(self
            .candidates
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn insert(&self, candidate: Candidate) -> Result<(), AppError> {
        self.candidates.write().await.push(candidate);
        Ok(())
    }
}
