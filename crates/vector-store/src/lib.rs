//! # Supportbot Vector Store
//!
//! HTTP gateway to a Qdrant-compatible vector index.
//!
//! Two operations, one round trip each: upsert a single point, and
//! nearest-neighbor search with payloads. Writes go through the closed
//! [`PointPayload`] record; reads keep the payload untyped because the
//! collection may hold points this system did not write.
//!
//! ```text
//! upsert ──> PUT  /collections/{collection}/points
//! search ──> POST /collections/{collection}/points/search
//! ```
//!
//! Search hits are re-sorted by descending score after decoding; the
//! backend's own ordering is not trusted.

mod error;
mod index;
mod qdrant;
mod types;

pub use error::VectorStoreError;
pub use index::VectorIndex;
pub use qdrant::QdrantStore;
pub use types::{PointPayload, SearchResult};
