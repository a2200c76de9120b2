use serde_json::Value;

// ============================================================================
// Loosely-typed response unwrapping
// ============================================================================

/// Extract the textual payload from a completion response object.
///
/// Providers disagree on shape, so this checks a fixed priority order:
/// a `content` string field, then a `text` string field, then the first
/// element of an array inspected the same way. A bare string is its own
/// payload. Anything else degrades to its JSON string representation
/// rather than failing.
pub fn extract_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            if let Some(Value::String(s)) = map.get("content") {
                return s.clone();
            }
            if let Some(Value::String(s)) = map.get("text") {
                return s.clone();
            }
            value.to_string()
        }
        Value::Array(items) => match items.first() {
            Some(first) => extract_text(first),
            None => value.to_string(),
        },
        other => other.to_string(),
    }
}

// ============================================================================
// Fence stripping — template-directed, not a Markdown parser
// ============================================================================

/// Strip the fenced code-block wrapper a prompt template is known to elicit.
///
/// Removes a leading ```` ```<lang> ```` (or bare ```` ``` ````) marker and a
/// trailing closing fence, nothing more. Text without the expected markers is
/// returned trimmed but otherwise untouched.
pub fn strip_code_fence(text: &str, lang: &str) -> String {
    let trimmed = text.trim();
    let tagged = format!("```{lang}");

    let body = if let Some(rest) = trimmed.strip_prefix(&tagged) {
        rest
    } else if let Some(rest) = trimmed.strip_prefix("```") {
        rest
    } else {
        return trimmed.to_string();
    };

    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim().to_string()
}
