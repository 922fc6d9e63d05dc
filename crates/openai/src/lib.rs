//! # Supportbot OpenAI Gateway
//!
//! Thin HTTP gateway over an OpenAI-compatible provider: one embedding
//! call per text and one chat-completion call per answer. The rest of the
//! system depends on the [`EmbeddingProvider`] and [`CompletionProvider`]
//! seams, not on this concrete client, so orchestrators stay testable
//! without a network.
//!
//! No call is retried; the caller decides whether a failure aborts its
//! pipeline.

mod client;
mod error;
mod provider;

pub use client::OpenAiClient;
pub use error::{ClientError, CompletionError, EmbeddingError};
pub use provider::{CompletionProvider, EmbeddingProvider};

/// Default embedding model (1536-wide vectors)
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-ada-002";

/// Chat model used to compose grounded answers
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4-turbo-preview";

/// Public OpenAI API base
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
