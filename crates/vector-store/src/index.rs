use crate::error::VectorStoreError;
use crate::types::{PointPayload, SearchResult};
use async_trait::async_trait;

/// Remote vector index seam.
///
/// Implementations are stateless handles shared across request tasks; the
/// orchestrators depend on this trait so they can run against in-memory
/// doubles in tests.
#[async_trait]
pub trait VectorIndex: Send + Sync {
    /// Store one point. Overwrites any existing point with the same id.
    async fn upsert(
        &self,
        id: &str,
        vector: &[f32],
        payload: &PointPayload,
    ) -> Result<(), VectorStoreError>;

    /// Nearest-neighbor search, at most `limit` hits with payloads,
    /// ordered by descending score.
    async fn search(
        &self,
        vector: &[f32],
        limit: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError>;
}
