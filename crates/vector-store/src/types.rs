use serde::{Deserialize, Serialize};

/// Closed payload record stored alongside every vector.
///
/// This is the typed boundary to the index's untyped wire payload: every
/// write serializes exactly these three keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointPayload {
    /// Stored filename of the source document
    pub filename: String,

    /// 0-based chunk position within the document
    pub chunk_index: usize,

    /// The original chunk text
    pub text: String,
}

/// One nearest-neighbor hit, payload left untyped.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    /// Point identifier
    pub id: String,

    /// Similarity score, higher is more similar (provider-defined scale)
    pub score: f32,

    /// The stored payload mapping; absent payloads decode as JSON null
    #[serde(default)]
    pub payload: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_payload_serializes_exact_wire_keys() {
        let payload = PointPayload {
            filename: "guide.pdf".to_string(),
            chunk_index: 3,
            text: "reset the router".to_string(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "filename": "guide.pdf",
                "chunk_index": 3,
                "text": "reset the router",
            })
        );
    }

    #[test]
    fn test_search_result_tolerates_missing_payload() {
        let result: SearchResult =
            serde_json::from_value(serde_json::json!({"id": "a_0", "score": 0.5})).unwrap();
        assert_eq!(result.id, "a_0");
        assert!(result.payload.is_null());
    }
}
