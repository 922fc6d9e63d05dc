use crate::error::{ClientError, CompletionError, EmbeddingError};
use crate::provider::{CompletionProvider, EmbeddingProvider};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Duration;

const SYSTEM_PROMPT: &str = "You are a helpful support assistant. \
Use the provided context to answer questions accurately. \
Always cite your sources.";

/// Async client for OpenAI-compatible embedding and chat endpoints.
///
/// The Authorization header is installed once at construction; the inner
/// `reqwest::Client` is cheap to clone and safe for concurrent use.
#[derive(Clone, Debug)]
pub struct OpenAiClient {
    client: reqwest::Client,
    embeddings_url: String,
    completions_url: String,
    embedding_model: String,
    chat_model: String,
}

impl OpenAiClient {
    /// Build a client for `base_url` (e.g. `https://api.openai.com/v1`).
    pub fn new(
        api_key: &str,
        base_url: &str,
        embedding_model: impl Into<String>,
        chat_model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        if api_key.trim().is_empty() {
            return Err(ClientError::MissingApiKey);
        }

        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", api_key.trim());
        headers.insert(AUTHORIZATION, HeaderValue::from_str(&auth)?);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        let base = base_url.trim_end_matches('/');
        Ok(Self {
            client,
            embeddings_url: format!("{base}/embeddings"),
            completions_url: format!("{base}/chat/completions"),
            embedding_model: embedding_model.into(),
            chat_model: chat_model.into(),
        })
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiClient {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let request = EmbeddingRequest {
            model: &self.embedding_model,
            input: [text],
        };

        let resp = self
            .client
            .post(&self.embeddings_url)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(EmbeddingError::Status { status, body });
        }

        let parsed: EmbeddingResponse = resp.json().await?;
        let vector = parsed
            .data
            .into_iter()
            .next()
            .map(|entry| entry.embedding)
            .ok_or(EmbeddingError::Empty)?;

        log::debug!("embedded {} chars into {} dims", text.len(), vector.len());
        Ok(vector)
    }
}

#[async_trait]
impl CompletionProvider for OpenAiClient {
    async fn complete(
        &self,
        question: &str,
        context_block: &str,
    ) -> Result<String, CompletionError> {
        let user = format!("Context:\n{context_block}\n\nQuestion: {question}");
        let request = ChatRequest {
            model: &self.chat_model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user,
                },
            ],
        };

        let resp = self
            .client
            .post(&self.completions_url)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            return Err(CompletionError::Status { status, body });
        }

        let parsed: ChatResponse = resp.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or(CompletionError::NoChoices)
    }
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: [&'a str; 1],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    content: String,
}
