use std::error::Error as StdError;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;
use tokio::time::timeout;

use crate::prompt::recipe_prompt;

pub const DEFAULT_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-1.5-flash:generateContent";

pub const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    api_key: Option<String>,
    api_url: String,
    timeout: Duration,
}

impl GeminiConfig {
    /// An empty key is treated the same as an absent one.
    pub fn new(api_key: Option<String>, api_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.filter(|key| !key.is_empty()),
            api_url: api_url.into(),
            timeout: UPSTREAM_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Every way a recipe request can fail. The `Display` text is what callers see.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RelayError {
    #[error("Gemini API key not found")]
    ConfigurationMissing,
    #[error("Gemini API request timed out")]
    Timeout,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Gemini API error {status}: {body}")]
    UpstreamStatus { status: u16, body: String },
    #[error("Invalid response structure from Gemini API")]
    InvalidShape,
    #[error("Server error: {0}")]
    Unexpected(String),
}

impl RelayError {
    fn from_transport(err: reqwest::Error) -> Self {
        // The request URL carries the API key.
        Self::Network(error_chain(&err.without_url()))
    }
}

fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
struct RequestPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_k: u32,
    top_p: f64,
    max_output_tokens: u32,
}

impl GenerateContentRequest {
    fn user_prompt(prompt: String) -> Self {
        Self {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.7,
                top_k: 40,
                top_p: 0.95,
                max_output_tokens: 1024,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub async fn generate_recipe(&self, ingredients: &str) -> Result<String, RelayError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(RelayError::ConfigurationMissing)?;

        let request = GenerateContentRequest::user_prompt(recipe_prompt(ingredients));

        tracing::info!("calling Gemini API");
        let exchange = async {
            let response = self
                .http
                .post(&self.config.api_url)
                .query(&[("key", api_key)])
                .header(CONTENT_TYPE, "application/json")
                .json(&request)
                .send()
                .await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<_, reqwest::Error>((status, body))
        };

        let (status, body) = timeout(self.config.timeout, exchange)
            .await
            .map_err(|_| RelayError::Timeout)?
            .map_err(RelayError::from_transport)?;

        tracing::info!(status = status.as_u16(), "Gemini API responded");

        if status != StatusCode::OK {
            return Err(RelayError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        extract_recipe_text(&body)
    }
}

fn extract_recipe_text(body: &str) -> Result<String, RelayError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| RelayError::Unexpected(format!("failed to decode Gemini API response: {e}")))?;

    let keys: Vec<&str> = value
        .as_object()
        .map(|object| object.keys().map(String::as_str).collect())
        .unwrap_or_default();
    tracing::info!(?keys, "Gemini API response structure");

    let text = value
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned);

    match text {
        Some(text) => {
            tracing::info!(length = text.len(), "recipe generated");
            Ok(text)
        }
        None => {
            tracing::warn!(response = %value, "Gemini API response has no candidate text");
            Err(RelayError::InvalidShape)
        }
    }
}
