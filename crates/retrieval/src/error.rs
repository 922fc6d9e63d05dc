use supportbot_openai::{CompletionError, EmbeddingError};
use supportbot_vector_store::VectorStoreError;
use thiserror::Error;

/// Result type for retrieval operations
pub type Result<T> = std::result::Result<T, RetrievalError>;

/// Errors that abort a chat query
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// Query embedding failed
    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Vector index search failed
    #[error("Vector store error: {0}")]
    Search(#[from] VectorStoreError),

    /// Completion provider failed
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),
}
