use std::path::PathBuf;
use thiserror::Error;

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting text from a document
#[derive(Error, Debug)]
pub enum ExtractError {
    /// File extension is not a recognized document kind
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// The document container could not be opened or parsed
    #[error("failed to open PDF {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    /// A single page could not be extracted; fatal for the whole document
    #[error("failed to extract text from page {page}: {source}")]
    Page {
        page: u32,
        #[source]
        source: lopdf::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
