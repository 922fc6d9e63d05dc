use crate::config::ChunkingConfig;
use crate::error::Result;

/// Main chunker interface for splitting raw text into word windows
pub struct TextChunker {
    config: ChunkingConfig,
}

impl TextChunker {
    /// Create a new chunker with a validated configuration
    pub fn new(config: ChunkingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this chunker was built with
    #[must_use]
    pub const fn config(&self) -> ChunkingConfig {
        self.config
    }

    /// Split `text` into overlapping word-window chunks.
    ///
    /// Words are whitespace fields: consecutive whitespace collapses and
    /// leading/trailing whitespace is ignored. A chunk closes every
    /// `chunk_size` words; the last `chunk_overlap` words of the closed
    /// window are re-emitted as the prefix of the following one. The
    /// trailing partial window, if non-empty, becomes a final short chunk.
    ///
    /// Pure and deterministic: the same text and configuration always
    /// produce the same chunk sequence. Empty text produces no chunks.
    #[must_use]
    pub fn chunk(&self, text: &str) -> Vec<String> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let mut chunks = Vec::new();
        let mut buffer = String::new();

        for (i, word) in words.iter().enumerate() {
            buffer.push_str(word);
            buffer.push(' ');

            if (i + 1) % self.config.chunk_size == 0 {
                chunks.push(buffer.trim_end().to_string());
                buffer.clear();

                // Seed the next window with the tail of the one just closed.
                // Skipped when the document ends within `chunk_overlap` words
                // of the boundary: a document landing exactly on a boundary
                // must not emit a trailing overlap-only chunk.
                if i + self.config.chunk_overlap < words.len() {
                    let start = (i + 1).saturating_sub(self.config.chunk_overlap);
                    for seed in &words[start..=i] {
                        buffer.push_str(seed);
                        buffer.push(' ');
                    }
                }
            }
        }

        if !buffer.is_empty() {
            chunks.push(buffer.trim_end().to_string());
        }

        log::debug!(
            "chunked {} words into {} chunks (size {}, overlap {})",
            words.len(),
            chunks.len(),
            self.config.chunk_size,
            self.config.chunk_overlap
        );

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chunker(size: usize, overlap: usize) -> TextChunker {
        TextChunker::new(ChunkingConfig::new(size, overlap)).unwrap()
    }

    #[test]
    fn test_empty_text_yields_no_chunks() {
        assert!(chunker(10, 2).chunk("").is_empty());
        assert!(chunker(10, 2).chunk("   \n\t  ").is_empty());
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        assert!(TextChunker::new(ChunkingConfig::new(5, 5)).is_err());
        assert!(TextChunker::new(ChunkingConfig::new(0, 0)).is_err());
    }

    #[test]
    fn test_whitespace_collapses_like_fields() {
        let chunks = chunker(3, 0).chunk("  a\t\tb \n c   d  ");
        assert_eq!(chunks, vec!["a b c", "d"]);
    }

    #[test]
    fn test_disjoint_windows_without_overlap() {
        let chunks = chunker(2, 0).chunk("a b c d e");
        assert_eq!(chunks, vec!["a b", "c d", "e"]);
    }

    #[test]
    fn test_overlap_reemits_window_tail() {
        let chunks = chunker(4, 2).chunk("w1 w2 w3 w4 w5 w6 w7");
        assert_eq!(chunks, vec!["w1 w2 w3 w4", "w3 w4 w5 w6 w7"]);
    }

    #[test]
    fn test_exact_boundary_has_no_trailing_overlap_chunk() {
        // 4 words, window of 2, overlap of 1: the document ends on a window
        // boundary, so no overlap-only chunk trails the final window.
        let chunks = chunker(2, 1).chunk("a b c d");
        assert_eq!(chunks, vec!["a b", "b c", "c d"]);
    }

    #[test]
    fn test_single_word_shorter_than_window() {
        assert_eq!(chunker(10, 3).chunk("hello"), vec!["hello"]);
    }

    #[test]
    fn test_chunking_is_deterministic() {
        let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
        let a = chunker(3, 1).chunk(text);
        let b = chunker(3, 1).chunk(text);
        assert_eq!(a, b);
    }
}
