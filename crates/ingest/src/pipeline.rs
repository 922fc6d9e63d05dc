use crate::error::{IngestError, Result};
use crate::stats::IngestStats;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use supportbot_extractor::extract_units;
use supportbot_openai::EmbeddingProvider;
use supportbot_text_chunker::TextChunker;
use supportbot_vector_store::{PointPayload, VectorIndex};

/// Drives extract → chunk → embed → store for one uploaded file.
pub struct IngestionPipeline {
    chunker: TextChunker,
    embedder: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn VectorIndex>,
}

impl IngestionPipeline {
    /// Build a pipeline around an already-validated chunker and the two
    /// injected gateway handles.
    pub fn new(
        chunker: TextChunker,
        embedder: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn VectorIndex>,
    ) -> Self {
        Self {
            chunker,
            embedder,
            index,
        }
    }

    /// Ingest the stored upload at `path`, identified as `filename` in the
    /// vector index.
    ///
    /// Every chunk becomes one point `<filename>_<chunkIndex>`. Stages run
    /// sequentially; the first failure aborts the rest of the file and the
    /// already-stored chunks remain stored.
    pub async fn ingest_file(&self, path: &Path, filename: &str) -> Result<IngestStats> {
        let started = Instant::now();

        let units = extract_units(path)?;
        let chunks = self.chunk_units(&units);
        let total = chunks.len();
        log::info!(
            "ingesting {filename}: {} units, {total} chunks",
            units.len()
        );

        for (chunk_index, text) in chunks.iter().enumerate() {
            let id = format!("{filename}_{chunk_index}");

            let vector =
                self.embedder
                    .embed(text)
                    .await
                    .map_err(|source| IngestError::Embed {
                        chunk_index,
                        total,
                        source,
                    })?;

            let payload = PointPayload {
                filename: filename.to_string(),
                chunk_index,
                text: text.clone(),
            };

            self.index
                .upsert(&id, &vector, &payload)
                .await
                .map_err(|source| IngestError::Store {
                    chunk_index,
                    total,
                    source,
                })?;

            log::debug!("stored chunk {chunk_index} of {total} for {filename}");
        }

        Ok(IngestStats {
            units: units.len(),
            chunks: total,
            time_ms: started.elapsed().as_millis() as u64,
        })
    }

    /// Chunk each extracted unit independently (fresh overlap state per
    /// unit); the combined sequence carries the continuous chunk indices
    /// used for storage.
    fn chunk_units(&self, units: &[String]) -> Vec<String> {
        let mut chunks = Vec::new();
        for unit in units {
            chunks.extend(self.chunker.chunk(unit));
        }
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use supportbot_openai::EmbeddingError;
    use supportbot_text_chunker::ChunkingConfig;
    use supportbot_vector_store::{SearchResult, VectorStoreError};

    struct NoopEmbedder;

    #[async_trait::async_trait]
    impl EmbeddingProvider for NoopEmbedder {
        async fn embed(&self, _text: &str) -> std::result::Result<Vec<f32>, EmbeddingError> {
            Ok(vec![0.0; 4])
        }
    }

    struct NoopIndex;

    #[async_trait::async_trait]
    impl VectorIndex for NoopIndex {
        async fn upsert(
            &self,
            _id: &str,
            _vector: &[f32],
            _payload: &PointPayload,
        ) -> std::result::Result<(), VectorStoreError> {
            Ok(())
        }

        async fn search(
            &self,
            _vector: &[f32],
            _limit: usize,
        ) -> std::result::Result<Vec<SearchResult>, VectorStoreError> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_units_are_chunked_independently_with_continuous_ordering() {
        let pipeline = IngestionPipeline::new(
            TextChunker::new(ChunkingConfig::new(2, 1)).unwrap(),
            Arc::new(NoopEmbedder),
            Arc::new(NoopIndex),
        );

        // No chunk bridges the unit boundary: the second unit starts with
        // fresh overlap state.
        let units = vec!["a b c".to_string(), "d e".to_string()];
        let chunks = pipeline.chunk_units(&units);
        assert_eq!(chunks, vec!["a b", "b c", "d e"]);
    }
}
