use serde_json::Value;

pub const CONTENT_TYPE: &str = "application/json";

/// Cheap shape check, used before deciding to label a raw body as JSON.
pub fn is_json_content(content: &str) -> bool {
    let trimmed = content.trim();
    (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
}

/// Re-indents a JSON document. Returns `None` when `content` does not parse.
pub fn pretty(content: &str) -> Option<String> {
    let value: Value = serde_json::from_str(content).ok()?;
    serde_json::to_string_pretty(&value).ok()
}
