use crate::error::{ChunkerError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for word-window chunking behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkingConfig {
    /// Window size in words; every chunk except possibly the last one of a
    /// document holds exactly this many words
    pub chunk_size: usize,

    /// Number of trailing words of a closed window re-emitted at the start
    /// of the following window
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
        }
    }
}

impl ChunkingConfig {
    /// Create a config with explicit window and overlap sizes
    #[must_use]
    pub const fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
        }
    }

    /// Validate configuration
    ///
    /// The overlap must be strictly smaller than the window, otherwise the
    /// window can never advance past the re-seeded prefix.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(ChunkerError::invalid_config("chunk_size must be > 0"));
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(ChunkerError::invalid_config(format!(
                "chunk_overlap ({}) must be less than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = ChunkingConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.chunk_size, 1000);
        assert_eq!(config.chunk_overlap, 200);
    }

    #[test]
    fn test_zero_chunk_size_rejected() {
        let config = ChunkingConfig::new(0, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overlap_must_be_smaller_than_window() {
        assert!(ChunkingConfig::new(100, 100).validate().is_err());
        assert!(ChunkingConfig::new(100, 150).validate().is_err());
        assert!(ChunkingConfig::new(100, 99).validate().is_ok());
        assert!(ChunkingConfig::new(100, 0).validate().is_ok());
    }

    #[test]
    fn test_validation_error_names_both_values() {
        let err = ChunkingConfig::new(10, 20).validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("20"), "missing overlap in: {msg}");
        assert!(msg.contains("10"), "missing chunk_size in: {msg}");
    }
}
