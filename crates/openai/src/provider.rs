use crate::error::{CompletionError, EmbeddingError};
use async_trait::async_trait;

/// Turns one text into a fixed-width embedding vector.
///
/// Implementations are stateless handles, safe to share across request
/// tasks behind an `Arc`.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a single text. One provider round trip per call.
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;
}

/// Answers a question grounded on an already-assembled context block.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Compose an answer from the fixed system instruction, the context
    /// block, and the user's question. Returns the first choice verbatim.
    async fn complete(
        &self,
        question: &str,
        context_block: &str,
    ) -> Result<String, CompletionError>;
}
