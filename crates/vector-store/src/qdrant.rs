use crate::error::VectorStoreError;
use crate::index::VectorIndex;
use crate::types::{PointPayload, SearchResult};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::Duration;

/// Gateway to a Qdrant-compatible HTTP vector index.
///
/// One shared transport client, one round trip per operation, no batching
/// and no retries. Any non-200 response is treated uniformly as a failure;
/// the status code is not inspected for structured error detail.
#[derive(Clone)]
pub struct QdrantStore {
    client: reqwest::Client,
    base_url: String,
    collection: String,
}

impl QdrantStore {
    /// Build a gateway for `base_url` (e.g. `http://localhost:6333`) and a
    /// collection name. The collection is created implicitly by the
    /// backend on first write.
    pub fn new(
        base_url: &str,
        collection: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, VectorStoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(VectorStoreError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: collection.into(),
        })
    }

    fn points_url(&self) -> String {
        format!("{}/collections/{}/points", self.base_url, self.collection)
    }

    fn search_url(&self) -> String {
        format!(
            "{}/collections/{}/points/search",
            self.base_url, self.collection
        )
    }
}

#[async_trait]
impl VectorIndex for QdrantStore {
    async fn upsert(
        &self,
        id: &str,
        vector: &[f32],
        payload: &PointPayload,
    ) -> Result<(), VectorStoreError> {
        let request = UpsertRequest {
            points: [Point {
                id,
                vector,
                payload,
            }],
        };

        let resp = self
            .client
            .put(self.points_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| VectorStoreError::Write(format!("failed to send request: {e}")))?;

        if resp.status() != StatusCode::OK {
            return Err(VectorStoreError::Write(format!(
                "unexpected status code: {}",
                resp.status().as_u16()
            )));
        }

        log::debug!("upserted point {id} into {}", self.collection);
        Ok(())
    }

    async fn search(
        &self,
        vector: &[f32],
        limit: usize,
    ) -> Result<Vec<SearchResult>, VectorStoreError> {
        let request = SearchRequest {
            vector,
            limit,
            with_payload: true,
        };

        let resp = self
            .client
            .post(self.search_url())
            .json(&request)
            .send()
            .await
            .map_err(|e| VectorStoreError::Search(format!("failed to send request: {e}")))?;

        if resp.status() != StatusCode::OK {
            return Err(VectorStoreError::Search(format!(
                "unexpected status code: {}",
                resp.status().as_u16()
            )));
        }

        let parsed: SearchResponse = resp
            .json()
            .await
            .map_err(|e| VectorStoreError::Search(format!("failed to decode response: {e}")))?;

        let mut results = parsed.result;
        sort_by_score(&mut results);

        log::debug!(
            "search in {} returned {} hits (limit {limit})",
            self.collection,
            results.len()
        );
        Ok(results)
    }
}

/// Descending by score; ties keep the backend's order (stable sort).
fn sort_by_score(results: &mut [SearchResult]) {
    results.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
}

#[derive(Serialize)]
struct UpsertRequest<'a> {
    points: [Point<'a>; 1],
}

#[derive(Serialize)]
struct Point<'a> {
    id: &'a str,
    vector: &'a [f32],
    payload: &'a PointPayload,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    vector: &'a [f32],
    limit: usize,
    with_payload: bool,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    result: Vec<SearchResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_urls_follow_the_collections_layout() {
        let store = QdrantStore::new(
            "http://localhost:6333/",
            "support_docs",
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            store.points_url(),
            "http://localhost:6333/collections/support_docs/points"
        );
        assert_eq!(
            store.search_url(),
            "http://localhost:6333/collections/support_docs/points/search"
        );
    }

    #[test]
    fn test_upsert_body_wraps_a_single_point() {
        let payload = PointPayload {
            filename: "faq.txt".to_string(),
            chunk_index: 0,
            text: "hello".to_string(),
        };
        let request = UpsertRequest {
            points: [Point {
                id: "faq.txt_0",
                vector: &[0.25, 0.5],
                payload: &payload,
            }],
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["points"].as_array().unwrap().len(), 1);
        assert_eq!(value["points"][0]["id"], "faq.txt_0");
        assert_eq!(value["points"][0]["payload"]["chunk_index"], 0);
    }

    #[test]
    fn test_search_body_always_requests_payloads() {
        let request = SearchRequest {
            vector: &[0.1],
            limit: 5,
            with_payload: true,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["limit"], 5);
        assert_eq!(value["with_payload"], true);
    }

    #[test]
    fn test_decoded_hits_are_resorted_by_score() {
        let body = serde_json::json!({
            "result": [
                {"id": "b", "score": 0.2, "payload": {"text": "two"}},
                {"id": "a", "score": 0.9, "payload": {"text": "one"}},
                {"id": "c", "score": 0.5},
            ]
        });
        let mut parsed: SearchResponse = serde_json::from_value(body).unwrap();
        sort_by_score(&mut parsed.result);

        let ids: Vec<&str> = parsed.result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
    }

    #[test]
    fn test_equal_scores_keep_backend_order() {
        let body = serde_json::json!({
            "result": [
                {"id": "first", "score": 0.5},
                {"id": "second", "score": 0.5},
            ]
        });
        let mut parsed: SearchResponse = serde_json::from_value(body).unwrap();
        sort_by_score(&mut parsed.result);

        let ids: Vec<&str> = parsed.result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }
}
