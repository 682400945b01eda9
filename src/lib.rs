pub mod api;
pub mod config;
pub mod gemini;
pub mod prompt;

use std::sync::Arc;

use axum::Router;
use tracing_subscriber::EnvFilter;

use crate::gemini::{GeminiClient, GeminiConfig};

/// Immutable per-process state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub gemini: Arc<GeminiClient>,
}

impl AppState {
    pub fn new(gemini: GeminiConfig) -> Self {
        Self {
            gemini: Arc::new(GeminiClient::new(gemini)),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    api::router(state)
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub async fn run_server(app: Router, host: &str, port: u16) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app).await
}
