use crate::error::ApiError;
use crate::models::AnalyzeResult;

const SNIPPET_CHARS: usize = 200;

/// Slice out the span from the first `{` to the last `}` in the reply,
/// spanning newlines. Models tend to wrap the object in commentary; this
/// greedy scan tolerates that. It is a heuristic, not a balanced-brace
/// parser: a reply with several objects or stray braces in the prose can
/// mis-extract, in which case the JSON parse below reports the failure.
/// When no such span exists the whole text is the candidate.
pub fn extract_json(text: &str) -> &str {
  match (text.find('{'), text.rfind('}')) {
    (Some(start), Some(end)) if start < end => &text[start..=end],
    _ => text,
  }
}

/// Turn a raw model reply into a typed analysis result: extract the
/// embedded object, parse it, then let serde enforce the result shape
/// (required keys, enumerated category and urgency).
pub fn coerce_result(raw: &str) -> Result<AnalyzeResult, ApiError> {
  let candidate = extract_json(raw);
  let value: serde_json::Value =
    serde_json::from_str(candidate).map_err(|e| ApiError::InvalidModelJson {
      reason: e.to_string(),
      snippet: snippet(raw),
    })?;
  serde_json::from_value(value).map_err(|e| ApiError::ShapeMismatch {
    reason: e.to_string(),
    snippet: snippet(raw),
  })
}

fn snippet(raw: &str) -> String {
  raw.chars().take(SNIPPET_CHARS).collect()
}
