use std::path::PathBuf;
use std::sync::Arc;
use supportbot_ingest::IngestionPipeline;
use supportbot_retrieval::RetrievalPipeline;

/// Shared handles for the request handlers. Everything inside is stateless
/// or internally synchronized, so the state clones freely per request.
#[derive(Clone)]
pub struct AppState {
    pub ingest: Arc<IngestionPipeline>,
    pub retrieval: Arc<RetrievalPipeline>,
    pub upload_dir: PathBuf,
}
