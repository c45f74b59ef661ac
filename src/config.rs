use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
  pub backend_url: String,
  pub default_model: String,
  pub bind_addr: String,
  pub log_path: PathBuf,
  pub request_timeout: Duration,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      backend_url: "http://127.0.0.1:11434".to_string(),
      default_model: "qwen2:7b".to_string(),
      bind_addr: "0.0.0.0:4001".to_string(),
      log_path: PathBuf::from("lingualens.log"),
      request_timeout: Duration::from_secs(300),
    }
  }
}

impl AppConfig {
  pub fn from_env() -> Self {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let defaults = Self::default();
    let timeout = lookup("REQUEST_TIMEOUT_SECS")
      .and_then(|v| v.parse::<u64>().ok())
      .map(Duration::from_secs)
      .unwrap_or(defaults.request_timeout);

    Self {
      backend_url: lookup("OLLAMA_BASE_URL").unwrap_or(defaults.backend_url),
      default_model: lookup("MODEL_ID").unwrap_or(defaults.default_model),
      bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
      log_path: lookup("LOG_PATH").map(PathBuf::from).unwrap_or(defaults.log_path),
      request_timeout: timeout,
    }
  }
}
