use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
    pub chunks: usize,
}

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// `POST /upload`: save the multipart `file` part under a unique name,
/// then run the ingestion pipeline on it.
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::bad_request("No file uploaded"))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let original = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|_| ApiError::bad_request("No file uploaded"))?;
        file = Some((original, bytes.to_vec()));
        break;
    }

    let Some((original, bytes)) = file else {
        return Err(ApiError::bad_request("No file uploaded"));
    };

    let filename = unique_filename(&original);
    let path = state.upload_dir.join(&filename);
    tokio::fs::write(&path, &bytes)
        .await
        .map_err(|_| ApiError::internal("Failed to save file"))?;
    log::info!("saved upload {original:?} as {filename}");

    let stats = state
        .ingest
        .ingest_file(&path, &filename)
        .await
        .map_err(|e| ApiError::internal(format!("Failed to process file: {e}")))?;

    Ok(Json(UploadResponse {
        message: "File processed and stored successfully".to_string(),
        filename,
        chunks: stats.chunks,
    }))
}

/// `POST /chat`: answer a query grounded on the stored chunks.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Ok(Json(request)) = body else {
        return Err(ApiError::bad_request("Invalid request"));
    };
    if request.message.trim().is_empty() {
        return Err(ApiError::bad_request("Invalid request"));
    }

    let response = state
        .retrieval
        .answer(&request.message)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?;

    Ok(Json(ChatResponse { response }))
}

/// Unique stored name for an upload: a fresh uuid with the client
/// filename's extension (and only its extension) preserved.
fn unique_filename(original: &str) -> String {
    let ext = Path::new(original)
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    format!("{}{ext}", Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unique_filename_preserves_the_extension() {
        let name = unique_filename("Quarterly Report.PDF");
        assert!(name.ends_with(".PDF"), "unexpected name: {name}");
        let stem = name.trim_end_matches(".PDF");
        assert!(Uuid::parse_str(stem).is_ok(), "stem is not a uuid: {stem}");
    }

    #[test]
    fn test_unique_filename_without_extension_is_a_bare_uuid() {
        let name = unique_filename("README");
        assert!(Uuid::parse_str(&name).is_ok(), "not a uuid: {name}");
    }

    #[test]
    fn test_unique_filenames_never_collide() {
        assert_ne!(unique_filename("a.txt"), unique_filename("a.txt"));
    }

    #[test]
    fn test_chat_request_tolerates_missing_message_field() {
        let request: ChatRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.message, "");
    }
}
