use serde::{Deserialize, Serialize};

/// Statistics about one ingestion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestStats {
    /// Extracted text units (pages for a PDF, one for plain text)
    pub units: usize,

    /// Chunks embedded and stored
    pub chunks: usize,

    /// Time taken in milliseconds
    pub time_ms: u64,
}
