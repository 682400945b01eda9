use std::env;

use thiserror::Error;

use crate::gemini::{GeminiConfig, DEFAULT_API_URL};

pub const ENV_FILE: &str = "API-Key.env";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub gemini: GeminiConfig,
}

impl AppConfig {
    /// Loads `API-Key.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        if dotenv::from_filename(ENV_FILE).is_ok() {
            tracing::debug!("loaded {ENV_FILE}");
        }
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue { var: "PORT", value })?,
            None => DEFAULT_PORT,
        };

        let api_url = lookup("GEMINI_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            host,
            port,
            gemini: GeminiConfig::new(lookup("GEMINI_API_KEY"), api_url),
        })
    }
}
