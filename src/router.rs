use std::net::TcpListener;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::extract::coerce_result;
use crate::logger::Logger;
use crate::models::{
  AnalyzeParams, AnalyzeRequest, AnalyzeResponse, ChatMessage, ChatRequest, ChatResponse,
  ChatStats, HealthResponse, Role,
};
use crate::ollama::{BackendChatRequest, OllamaClient};
use crate::prompts::AnalysisTemplate;

const DEFAULT_CHAT_TEMPERATURE: f64 = 0.2;
const ANALYZE_TEMPERATURE: f64 = 0.1;

pub struct RouterState {
  pub config: AppConfig,
  pub ollama: OllamaClient,
  pub logger: Arc<Logger>,
}

pub async fn run_router(listener: TcpListener, state: RouterState) -> anyhow::Result<()> {
  let app = router(Arc::new(state));
  listener.set_nonblocking(true)?;
  let listener = tokio::net::TcpListener::from_std(listener)?;
  axum::serve(listener, app).await?;
  Ok(())
}

fn router(state: Arc<RouterState>) -> Router {
  // CORS stays wide open; deployments are expected to put a tighter layer
  // in front.
  Router::new()
    .route("/health", get(health))
    .route("/v1/chat", post(chat))
    .route("/v1/analyze", post(analyze).get(analyze_get))
    .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
    .with_state(state)
}

/// Reports configuration only. Does not probe the backend, so `ok` is
/// always true while the process is up.
async fn health(State(state): State<Arc<RouterState>>) -> Json<HealthResponse> {
  Json(HealthResponse {
    ok: true,
    backend_url: state.ollama.base_url().to_string(),
    default_model: state.config.default_model.clone(),
  })
}

async fn chat(
  State(state): State<Arc<RouterState>>,
  Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
  let rid = uuid::Uuid::new_v4();
  let model = req.model.unwrap_or_else(|| state.config.default_model.clone());
  state.logger.info(&format!("rid={rid} chat model={model} messages={}", req.messages.len()));

  let temperature = req.temperature.unwrap_or(DEFAULT_CHAT_TEMPERATURE);
  let options = req
    .options
    .unwrap_or_else(|| serde_json::json!({ "temperature": temperature }));

  let payload = BackendChatRequest {
    model: model.clone(),
    messages: req.messages,
    stream: false,
    options,
  };
  let data = state.ollama.chat(&payload).await.map_err(|err| {
    state.logger.error(&format!("rid={rid} chat {}: {err}", err.code()));
    err
  })?;

  Ok(Json(ChatResponse {
    model,
    reply: data.content().to_string(),
    stats: Some(ChatStats {
      total_duration_ns: data.total_duration,
      eval_count: data.eval_count,
      prompt_eval_count: data.prompt_eval_count,
    }),
  }))
}

async fn analyze(
  State(state): State<Arc<RouterState>>,
  Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  analyze_once(&state, &req.text, req.language.as_str(), req.model)
    .await
    .map(Json)
}

async fn analyze_get(
  State(state): State<Arc<RouterState>>,
  Query(params): Query<AnalyzeParams>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  let language = params.language.unwrap_or_else(|| "auto".to_string());
  analyze_once(&state, &params.text, &language, params.model)
    .await
    .map(Json)
}

async fn analyze_once(
  state: &RouterState,
  text: &str,
  language: &str,
  model: Option<String>,
) -> Result<AnalyzeResponse, ApiError> {
  let rid = uuid::Uuid::new_v4();
  let language = validate_language(language)?;
  if text.trim().is_empty() {
    return Err(ApiError::EmptyText);
  }

  let model = model.unwrap_or_else(|| state.config.default_model.clone());
  state.logger.info(&format!("rid={rid} analyze model={model} language={language}"));

  let template = AnalysisTemplate::for_language(&language);
  let payload = BackendChatRequest {
    model: model.clone(),
    messages: vec![
      ChatMessage {
        role: Role::System,
        content: template.system_prompt().to_string(),
      },
      ChatMessage {
        role: Role::User,
        content: text.to_string(),
      },
    ],
    stream: false,
    options: serde_json::json!({ "temperature": ANALYZE_TEMPERATURE }),
  };

  let data = state.ollama.chat(&payload).await.map_err(|err| {
    state.logger.error(&format!("rid={rid} analyze {}: {err}", err.code()));
    err
  })?;

  let result = coerce_result(data.content().trim()).map_err(|err| {
    state.logger.error(&format!("rid={rid} analyze {}: {err}", err.code()));
    err
  })?;
  Ok(AnalyzeResponse { model, result })
}

/// Runtime gate over the requested language. Narrower than the request
/// schema: "multi" deserializes fine but is rejected here, so existing
/// callers keep seeing the same 422. An absent or empty value means "auto".
fn validate_language(language: &str) -> Result<String, ApiError> {
  let normalized = language.trim().to_lowercase();
  if normalized.is_empty() {
    return Ok("auto".to_string());
  }
  match normalized.as_str() {
    "th" | "en" | "auto" => Ok(normalized),
    _ => Err(ApiError::InvalidLanguage),
  }
}
