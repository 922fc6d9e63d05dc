//! # Supportbot Ingest
//!
//! Document ingestion for grounded support answers.
//!
//! ## Pipeline
//!
//! ```text
//! Uploaded file
//!     │
//!     ├──> Extractor (one text unit per page, or the whole file)
//!     │
//!     ├──> Chunker (overlapping word windows, fresh state per unit)
//!     │
//!     └──> Per chunk, in index order
//!          ├─> Embedding Gateway
//!          └─> Vector index upsert (`<filename>_<index>`)
//! ```
//!
//! Strictly sequential and fail-fast: the first embed or store failure
//! aborts the remaining chunks and surfaces the offending chunk's context.
//! Chunks stored before the failure stay stored; there is no compensating
//! delete. A best-effort ingestion tool, not a transactional system.

mod error;
mod pipeline;
mod stats;

pub use error::{IngestError, Result};
pub use pipeline::IngestionPipeline;
pub use stats::IngestStats;
