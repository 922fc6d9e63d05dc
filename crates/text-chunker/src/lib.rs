//! # Supportbot Text Chunker
//!
//! Deterministic word-window chunking for document ingestion.
//!
//! ## Philosophy
//!
//! Chunks are fixed-size word windows with a configurable overlap between
//! adjacent windows. Word-count windowing (not character-based, not
//! sentence-aware) is a deliberate simplicity/semantic tradeoff: it is
//! adequate for keyword-dense support documents, cheap to compute, and
//! stable under re-chunking as long as the configuration is unchanged.
//!
//! ## Pipeline
//!
//! ```text
//! Raw text
//!     │
//!     ├──> Whitespace word split (consecutive whitespace collapses)
//!     │
//!     └──> Window walk
//!          ├─> Emit a chunk every `chunk_size` words
//!          ├─> Re-seed the next window with the last `chunk_overlap` words
//!          └─> Emit the trailing partial window, if any
//! ```
//!
//! ## Example
//!
//! ```rust
//! use supportbot_text_chunker::{ChunkingConfig, TextChunker};
//!
//! let chunker = TextChunker::new(ChunkingConfig::new(4, 1)).unwrap();
//! let chunks = chunker.chunk("a b c d e f");
//!
//! assert_eq!(chunks, vec!["a b c d", "d e f"]);
//! ```

mod chunker;
mod config;
mod error;

pub use chunker::TextChunker;
pub use config::ChunkingConfig;
pub use error::{ChunkerError, Result};
