//! # Supportbot Retrieval
//!
//! The read path: embed the user's query, pull the nearest stored chunks,
//! assemble their texts into a numbered context block, and hand block plus
//! question to the completion provider.
//!
//! Any stage failure aborts the whole request; there is no fallback to an
//! un-grounded answer. The single tolerated irregularity is a search hit
//! whose payload lacks a usable `text` field: it is skipped and the
//! surviving texts are renumbered.

mod context;
mod error;
mod pipeline;

pub use context::{context_texts, format_context};
pub use error::{RetrievalError, Result};
pub use pipeline::RetrievalPipeline;

/// Default number of nearest chunks pulled per query
pub const DEFAULT_TOP_K: usize = 5;
