use thiserror::Error;

/// Errors from the vector index gateway
#[derive(Error, Debug)]
pub enum VectorStoreError {
    /// Transport client construction failed
    #[error("failed to build vector store HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Upsert failed: transport error or any non-200 status
    #[error("store write failed: {0}")]
    Write(String),

    /// Search failed: transport error, non-200 status, or undecodable body
    #[error("store search failed: {0}")]
    Search(String),
}
