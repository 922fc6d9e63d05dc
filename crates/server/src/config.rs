use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use supportbot_text_chunker::{ChunkerError, ChunkingConfig};
use thiserror::Error;

/// Command-line and environment configuration.
///
/// Every knob has an env-var fallback so the binary runs unmodified in a
/// container; only the OpenAI API key has no usable default.
#[derive(Parser, Debug)]
#[command(
    name = "supportbot",
    about = "Support chatbot backend: document ingestion and grounded chat"
)]
pub struct Args {
    /// Address to bind the HTTP server to (host:port).
    #[arg(long, env = "SUPPORTBOT_BIND", default_value = "0.0.0.0:8080")]
    pub bind: String,

    /// OpenAI API key used for embeddings and completions.
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub openai_api_key: String,

    /// Base URL for OpenAI-compatible endpoints.
    #[arg(long, env = "OPENAI_BASE_URL", default_value = supportbot_openai::DEFAULT_BASE_URL)]
    pub openai_base_url: String,

    /// Embedding model identifier.
    #[arg(
        long,
        env = "SUPPORTBOT_EMBEDDING_MODEL",
        default_value = supportbot_openai::DEFAULT_EMBEDDING_MODEL
    )]
    pub embedding_model: String,

    /// Chat model identifier.
    #[arg(
        long,
        env = "SUPPORTBOT_CHAT_MODEL",
        default_value = supportbot_openai::DEFAULT_CHAT_MODEL
    )]
    pub chat_model: String,

    /// Base URL of the Qdrant-compatible vector index.
    #[arg(long, env = "QDRANT_URL", default_value = "http://localhost:6333")]
    pub qdrant_url: String,

    /// Vector index collection name.
    #[arg(long, env = "SUPPORTBOT_COLLECTION", default_value = "support_docs")]
    pub collection: String,

    /// Directory uploaded files are stored in.
    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,

    /// Chunk window size in words.
    #[arg(long, env = "SUPPORTBOT_CHUNK_SIZE", default_value_t = 1000)]
    pub chunk_size: usize,

    /// Words shared between adjacent chunks.
    #[arg(long, env = "SUPPORTBOT_CHUNK_OVERLAP", default_value_t = 200)]
    pub chunk_overlap: usize,

    /// Nearest chunks pulled per chat query.
    #[arg(
        long,
        env = "SUPPORTBOT_TOP_K",
        default_value_t = supportbot_retrieval::DEFAULT_TOP_K
    )]
    pub top_k: usize,

    /// Seconds before outbound HTTP requests time out.
    #[arg(long, env = "SUPPORTBOT_HTTP_TIMEOUT_SECS", default_value_t = 30)]
    pub http_timeout_secs: u64,
}

/// Startup configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No credential for the embedding/completion provider
    #[error("OPENAI_API_KEY environment variable is required")]
    MissingApiKey,

    /// Upload directory cannot be created
    #[error("failed to create upload directory {}: {source}", path.display())]
    UploadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Chunk window/overlap combination is unusable
    #[error("invalid chunking configuration: {0}")]
    Chunking(#[from] ChunkerError),
}

/// Validated runtime configuration
#[derive(Debug)]
pub struct Config {
    pub bind: String,
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub embedding_model: String,
    pub chat_model: String,
    pub qdrant_url: String,
    pub collection: String,
    pub upload_dir: PathBuf,
    pub chunking: ChunkingConfig,
    pub top_k: usize,
    pub http_timeout: Duration,
}

impl Args {
    /// Validate the parsed arguments and prepare the upload directory.
    pub fn validate(self) -> Result<Config, ConfigError> {
        if self.openai_api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }

        let chunking = ChunkingConfig::new(self.chunk_size, self.chunk_overlap);
        chunking.validate()?;

        std::fs::create_dir_all(&self.upload_dir).map_err(|source| ConfigError::UploadDir {
            path: self.upload_dir.clone(),
            source,
        })?;

        Ok(Config {
            bind: self.bind,
            openai_api_key: self.openai_api_key,
            openai_base_url: self.openai_base_url,
            embedding_model: self.embedding_model,
            chat_model: self.chat_model,
            qdrant_url: self.qdrant_url,
            collection: self.collection,
            upload_dir: self.upload_dir,
            chunking,
            top_k: self.top_k,
            http_timeout: Duration::from_secs(self.http_timeout_secs),
        })
    }
}
