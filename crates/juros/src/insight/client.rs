//! HTTP client for the Ollama generate API.

use std::fmt;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Connection settings for the tip backend.
#[derive(Debug, Clone)]
pub struct InsightConfig {
    pub base_url: String,
    pub model: String,
}

impl InsightConfig {
    /// Resolve settings from CLI values with environment overrides.
    ///
    /// `OLLAMA_HOST` and `OLLAMA_MODEL` take precedence over the flags so a
    /// shared shell profile keeps working regardless of how the binary is
    /// launched.
    pub fn resolve(cli_host: String, cli_model: String) -> Self {
        let base_url = std::env::var("OLLAMA_HOST").unwrap_or(cli_host);
        let model = std::env::var("OLLAMA_MODEL").unwrap_or(cli_model);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
        }
    }
}

/// Errors from the tip backend.
///
/// Nothing above the worker thread ever sees these; the worker converts any
/// of them into the fixed fallback sentence.
#[derive(Debug)]
pub enum InsightError {
    Http(reqwest::Error),
    EmptyResponse,
}

impl fmt::Display for InsightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InsightError::Http(e) => write!(f, "tip backend request failed: {e}"),
            InsightError::EmptyResponse => write!(f, "tip backend returned an empty response"),
        }
    }
}

impl std::error::Error for InsightError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InsightError::Http(e) => Some(e),
            InsightError::EmptyResponse => None,
        }
    }
}

impl From<reqwest::Error> for InsightError {
    fn from(e: reqwest::Error) -> Self {
        InsightError::Http(e)
    }
}

/// Request to the Ollama generate API
#[derive(Debug, Serialize)]
struct OllamaRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Response from the Ollama generate API
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: String,
}

/// Blocking HTTP client for the Ollama generate endpoint.
///
/// Blocking is fine here: requests run on the insight worker thread, never
/// on the UI loop.
pub struct InsightClient {
    http_client: Client,
    config: InsightConfig,
}

impl InsightClient {
    pub fn new(config: InsightConfig) -> Result<Self, InsightError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Ask the backend for tip text.
    pub fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        let request = OllamaRequest {
            model: &self.config.model,
            prompt,
            stream: false,
        };

        let response: OllamaResponse = self
            .http_client
            .post(format!("{}/api/generate", self.config.base_url))
            .json(&request)
            .send()?
            .error_for_status()?
            .json()?;

        let text = response.response.trim().to_string();
        if text.is_empty() {
            return Err(InsightError::EmptyResponse);
        }
        Ok(text)
    }
}
