use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  System,
  User,
  Assistant,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChatMessage {
  pub role: Role,
  pub content: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct ChatRequest {
  pub messages: Vec<ChatMessage>,
  pub model: Option<String>,
  pub temperature: Option<f64>,
  pub options: Option<serde_json::Value>,
}

#[derive(Serialize, Deserialize)]
pub struct ChatResponse {
  pub model: String,
  pub reply: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub stats: Option<ChatStats>,
}

#[derive(Serialize, Deserialize, Default)]
pub struct ChatStats {
  pub total_duration_ns: Option<u64>,
  pub eval_count: Option<u64>,
  pub prompt_eval_count: Option<u64>,
}

/// Languages a caller may name in the analyze request body. "multi" is
/// accepted by the schema but rejected at the runtime gate; see
/// `router::validate_language`.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Language {
  Th,
  En,
  Auto,
  Multi,
}

impl Language {
  pub fn as_str(&self) -> &'static str {
    match self {
      Language::Th => "th",
      Language::En => "en",
      Language::Auto => "auto",
      Language::Multi => "multi",
    }
  }
}

impl Default for Language {
  fn default() -> Self {
    Language::Auto
  }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct AnalyzeRequest {
  pub text: String,
  #[serde(default)]
  pub language: Language,
  pub model: Option<String>,
}

/// Query form of the analyze request. The language arrives as a free-form
/// string here and goes through the same runtime gate as the body form.
#[derive(Deserialize)]
pub struct AnalyzeParams {
  pub text: String,
  pub language: Option<String>,
  pub model: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  General,
  Complaint,
  Request,
  Other,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
  Low,
  Medium,
  High,
}

/// What the model is asked to emit for an analyze call. `language` stays a
/// plain string so auto-detection can report any ISO 639-1-ish code.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AnalyzeResult {
  pub summary: String,
  pub category: Category,
  pub urgency: Urgency,
  pub language: String,
}

#[derive(Serialize, Deserialize)]
pub struct AnalyzeResponse {
  pub model: String,
  pub result: AnalyzeResult,
}

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
  pub ok: bool,
  pub backend_url: String,
  pub default_model: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn role_serializes_lowercase() {
    let msg = ChatMessage {
      role: Role::Assistant,
      content: "hi".to_string(),
    };
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json["role"], "assistant");
  }

  #[test]
  fn analyze_request_language_defaults_to_auto() {
    let req: AnalyzeRequest = serde_json::from_str(r#"{"text":"hello"}"#).unwrap();
    assert_eq!(req.language, Language::Auto);
    assert!(req.model.is_none());
  }

  #[test]
  fn analyze_request_accepts_multi_in_schema() {
    let req: AnalyzeRequest =
      serde_json::from_str(r#"{"text":"hello","language":"multi"}"#).unwrap();
    assert_eq!(req.language, Language::Multi);
  }

  #[test]
  fn analyze_request_rejects_unknown_language() {
    let res = serde_json::from_str::<AnalyzeRequest>(r#"{"text":"hello","language":"xx"}"#);
    assert!(res.is_err());
  }

  #[test]
  fn category_rejects_values_outside_enum() {
    let res = serde_json::from_str::<Category>(r#""urgent""#);
    assert!(res.is_err());
  }

  #[test]
  fn chat_stats_omitted_when_absent() {
    let resp = ChatResponse {
      model: "qwen2:7b".to_string(),
      reply: "hello".to_string(),
      stats: None,
    };
    let json = serde_json::to_value(&resp).unwrap();
    assert!(json.get("stats").is_none());
  }
}
