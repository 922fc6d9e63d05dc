//! Supportbot server
//!
//! Two-route HTTP backend for a support chatbot: `POST /upload` ingests a
//! document into the vector index, `POST /chat` answers a question
//! grounded on the stored chunks.

use anyhow::{Context, Result};
use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use clap::Parser;
use std::sync::Arc;
use supportbot_ingest::IngestionPipeline;
use supportbot_openai::{CompletionProvider, EmbeddingProvider, OpenAiClient};
use supportbot_retrieval::RetrievalPipeline;
use supportbot_text_chunker::TextChunker;
use supportbot_vector_store::{QdrantStore, VectorIndex};
use tower_http::cors::{Any, CorsLayer};

mod config;
mod error;
mod handlers;
mod state;

use config::Args;
use state::AppState;

/// Largest accepted upload body.
const MAX_UPLOAD_BYTES: usize = 32 * 1024 * 1024;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let config = Args::parse().validate()?;

    let openai = Arc::new(OpenAiClient::new(
        &config.openai_api_key,
        &config.openai_base_url,
        &config.embedding_model,
        &config.chat_model,
        config.http_timeout,
    )?);
    let store = Arc::new(QdrantStore::new(
        &config.qdrant_url,
        config.collection.clone(),
        config.http_timeout,
    )?);

    let embedder: Arc<dyn EmbeddingProvider> = openai.clone();
    let completer: Arc<dyn CompletionProvider> = openai;
    let index: Arc<dyn VectorIndex> = store;

    let chunker = TextChunker::new(config.chunking)?;
    let ingest = Arc::new(IngestionPipeline::new(
        chunker,
        embedder.clone(),
        index.clone(),
    ));
    let retrieval = Arc::new(RetrievalPipeline::new(
        embedder,
        index,
        completer,
        config.top_k,
    ));

    let state = AppState {
        ingest,
        retrieval,
        upload_dir: config.upload_dir.clone(),
    };

    // The browser front end is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/upload", post(handlers::upload))
        .route("/chat", post(handlers::chat))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    log::info!(
        "supportbot listening on {} (collection {}, uploads in {})",
        config.bind,
        config.collection,
        config.upload_dir.display()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("failed to install shutdown handler: {e}");
    }
}
