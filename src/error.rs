use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Everything a handler can fail with. The display string doubles as the
/// `error` field of the JSON body sent to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("Ollama unreachable: {0}")]
  BackendUnreachable(String),

  #[error("Ollama error: {0}")]
  Backend(String),

  #[error("Model returned invalid JSON: {reason} | raw={snippet}")]
  InvalidModelJson { reason: String, snippet: String },

  #[error("JSON shape mismatch: {reason} | raw={snippet}")]
  ShapeMismatch { reason: String, snippet: String },

  #[error("language must be one of: th | en | auto")]
  InvalidLanguage,

  #[error("text must not be empty")]
  EmptyText,
}

impl ApiError {
  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::BackendUnreachable(_) | ApiError::Backend(_) => StatusCode::BAD_GATEWAY,
      ApiError::InvalidModelJson { .. } | ApiError::ShapeMismatch { .. } => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
      ApiError::InvalidLanguage | ApiError::EmptyText => StatusCode::UNPROCESSABLE_ENTITY,
    }
  }

  pub fn code(&self) -> &'static str {
    match self {
      ApiError::BackendUnreachable(_) => "backend_unreachable",
      ApiError::Backend(_) => "backend_error",
      ApiError::InvalidModelJson { .. } => "invalid_model_output",
      ApiError::ShapeMismatch { .. } => "shape_mismatch",
      ApiError::InvalidLanguage => "invalid_language",
      ApiError::EmptyText => "empty_text",
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let body = Json(serde_json::json!({ "error": self.to_string(), "code": self.code() }));
    (self.status(), body).into_response()
  }
}
