use reqwest::StatusCode;
use thiserror::Error;

/// Errors building the shared HTTP client
#[derive(Error, Debug)]
pub enum ClientError {
    /// API key absent or blank
    #[error("missing OpenAI API key")]
    MissingApiKey,

    /// API key cannot be carried in an HTTP header
    #[error("invalid OpenAI API key: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    /// Transport client construction failed
    #[error("failed to build OpenAI HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

/// Errors from the embedding endpoint
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// Transport failure or undecodable response body
    #[error("embedding request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("embedding provider returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Provider answered 200 with an empty data array
    #[error("no embedding data returned")]
    Empty,
}

/// Errors from the chat-completion endpoint
#[derive(Error, Debug)]
pub enum CompletionError {
    /// Transport failure or undecodable response body
    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Provider answered with a non-success status
    #[error("completion provider returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Provider answered 200 with no choices
    #[error("completion returned no choices")]
    NoChoices,
}
