use supportbot_extractor::ExtractError;
use supportbot_openai::EmbeddingError;
use supportbot_vector_store::VectorStoreError;
use thiserror::Error;

/// Result type for ingestion operations
pub type Result<T> = std::result::Result<T, IngestError>;

/// Errors that abort an ingestion run
#[derive(Error, Debug)]
pub enum IngestError {
    /// Extraction failed before any chunk was produced
    #[error("Extraction error: {0}")]
    Extract(#[from] ExtractError),

    /// Embedding failed; chunks before this index stay stored
    #[error("failed to embed chunk {chunk_index} of {total} ({chunk_index} chunks already stored): {source}")]
    Embed {
        chunk_index: usize,
        total: usize,
        #[source]
        source: EmbeddingError,
    },

    /// Upsert failed; chunks before this index stay stored
    #[error("failed to store chunk {chunk_index} of {total} ({chunk_index} chunks already stored): {source}")]
    Store {
        chunk_index: usize,
        total: usize,
        #[source]
        source: VectorStoreError,
    },
}
