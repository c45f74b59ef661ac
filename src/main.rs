mod config;
mod error;
mod extract;
mod logger;
mod models;
mod ollama;
mod prompts;
mod router;

use std::net::TcpListener;
use std::sync::Arc;

use config::AppConfig;
use logger::Logger;
use ollama::OllamaClient;
use router::{run_router, RouterState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  let config = AppConfig::from_env();

  let logger = Arc::new(Logger::new(&config.log_path)?);
  let ollama = OllamaClient::new(config.backend_url.clone(), config.request_timeout)?;

  let listener = TcpListener::bind(&config.bind_addr)?;
  logger.info(&format!(
    "lingualens listening on {} backend={} model={}",
    listener.local_addr()?,
    config.backend_url,
    config.default_model
  ));

  let state = RouterState { config, ollama, logger };
  run_router(listener, state).await
}
