use supportbot_vector_store::SearchResult;

/// Pull the `text` payload field out of each hit, preserving hit order.
///
/// Hits with a missing or non-string `text` are silently skipped (the
/// collection may hold points written by other tools), so the surviving
/// texts renumber densely downstream.
pub fn context_texts(results: &[SearchResult]) -> Vec<String> {
    results
        .iter()
        .filter_map(|result| {
            let text = result.payload.get("text").and_then(|value| value.as_str());
            if text.is_none() {
                log::warn!("search hit {} has no usable text payload, skipping", result.id);
            }
            text.map(str::to_string)
        })
        .collect()
}

/// Number the texts into the context block handed to the completion
/// provider: `[1] …`, `[2] …`, one line each.
pub fn format_context(texts: &[String]) -> String {
    let mut block = String::new();
    for (i, text) in texts.iter().enumerate() {
        block.push_str(&format!("[{}] {text}\n", i + 1));
    }
    block
}
