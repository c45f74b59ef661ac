use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::ChatMessage;

/// Wire shape of one call to the backend's chat endpoint. `stream` is
/// always false: replies come back as a single JSON body.
#[derive(Serialize, Clone)]
pub struct BackendChatRequest {
  pub model: String,
  pub messages: Vec<ChatMessage>,
  pub stream: bool,
  pub options: serde_json::Value,
}

#[derive(Deserialize, Debug)]
pub struct BackendChatResponse {
  pub message: Option<BackendChatMessage>,
  pub total_duration: Option<u64>,
  pub eval_count: Option<u64>,
  pub prompt_eval_count: Option<u64>,
}

#[derive(Deserialize, Debug)]
pub struct BackendChatMessage {
  pub content: String,
}

impl BackendChatResponse {
  pub fn content(&self) -> &str {
    self.message.as_ref().map(|m| m.content.as_str()).unwrap_or("")
  }
}

/// One-shot invoker for the Ollama chat endpoint. Every call is a single
/// synchronous POST with a hard timeout; nothing is retried.
#[derive(Clone)]
pub struct OllamaClient {
  http: reqwest::Client,
  base_url: String,
}

impl OllamaClient {
  pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
    let http = reqwest::Client::builder().timeout(timeout).build()?;
    Ok(Self {
      http,
      base_url: base_url.into(),
    })
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  pub async fn chat(&self, payload: &BackendChatRequest) -> Result<BackendChatResponse, ApiError> {
    let url = format!("{}/api/chat", self.base_url);
    let resp = self
      .http
      .post(&url)
      .json(payload)
      .send()
      .await
      .map_err(|err| ApiError::BackendUnreachable(err.to_string()))?;

    let status = resp.status();
    if status.is_client_error() || status.is_server_error() {
      let detail = resp
        .text()
        .await
        .unwrap_or_else(|_| "backend request failed".to_string());
      return Err(ApiError::Backend(detail));
    }

    resp
      .json::<BackendChatResponse>()
      .await
      .map_err(|err| ApiError::Backend(format!("invalid response body: {err}")))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn response_content_defaults_to_empty() {
    let resp: BackendChatResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp.content(), "");
    assert!(resp.total_duration.is_none());
  }

  #[test]
  fn response_carries_stats_when_present() {
    let resp: BackendChatResponse = serde_json::from_str(
      r#"{"message":{"content":"hi"},"total_duration":1200,"eval_count":42,"prompt_eval_count":7}"#,
    )
    .unwrap();
    assert_eq!(resp.content(), "hi");
    assert_eq!(resp.total_duration, Some(1200));
    assert_eq!(resp.eval_count, Some(42));
    assert_eq!(resp.prompt_eval_count, Some(7));
  }

  #[test]
  fn request_serializes_with_stream_false() {
    let payload = BackendChatRequest {
      model: "qwen2:7b".to_string(),
      messages: vec![],
      stream: false,
      options: serde_json::json!({"temperature": 0.1}),
    };
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json["stream"], false);
    assert_eq!(json["options"]["temperature"], 0.1);
  }

  #[tokio::test]
  async fn connection_refusal_surfaces_as_backend_unreachable() {
    // Bind then drop to get a port nothing is listening on.
    let port = {
      let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
      listener.local_addr().unwrap().port()
    };
    let client = OllamaClient::new(
      format!("http://127.0.0.1:{port}"),
      Duration::from_secs(2),
    )
    .unwrap();
    let payload = BackendChatRequest {
      model: "qwen2:7b".to_string(),
      messages: vec![],
      stream: false,
      options: serde_json::json!({}),
    };
    let err = client.chat(&payload).await.unwrap_err();
    assert!(matches!(err, ApiError::BackendUnreachable(_)));
  }
}
