use crate::context::{context_texts, format_context};
use crate::error::Result;
use std::sync::Arc;
use supportbot_openai::{CompletionProvider, EmbeddingProvider};
use supportbot_vector_store::VectorIndex;

/// Drives embed → search → context assembly → completion for one query.
pub struct RetrievalPipeline {
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
    completer: Arc<dyn CompletionProvider>,
    top_k: usize,
}

impl RetrievalPipeline {
    /// Build a pipeline around the three injected gateway handles.
    pub fn new(
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
        completer: Arc<dyn CompletionProvider>,
        top_k: usize,
    ) -> Self {
        Self {
            embedder,
            index,
            completer,
            top_k,
        }
    }

    /// Answer `query` grounded on the nearest stored chunks.
    ///
    /// Stages run sequentially and fail fast: a search failure never
    /// reaches the completion provider.
    pub async fn answer(&self, query: &str) -> Result<String> {
        let vector = self.embedder.embed(query).await?;
        let results = self.index.search(&vector, self.top_k).await?;

        let texts = context_texts(&results);
        let block = format_context(&texts);
        log::debug!(
            "grounding query on {} of {} search hits",
            texts.len(),
            results.len()
        );

        let answer = self.completer.complete(query, &block).await?;
        Ok(answer)
    }
}
