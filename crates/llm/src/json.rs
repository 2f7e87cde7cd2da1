use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use wanderwise_common::{Result, WanderWiseError};

fn fenced_block() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"(?s)```json\r?\n(.*?)\r?\n```").expect("valid regex"))
}

/// Parse model output as JSON
///
/// Uses the first fenced ```json block when present, otherwise the whole text.
pub fn extract_json(text: &str) -> Result<Value> {
    let candidate = fenced_block()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(text);

    serde_json::from_str(candidate.trim())
        .map_err(|e| WanderWiseError::llm(format!("Model returned invalid JSON: {}", e)))
}
