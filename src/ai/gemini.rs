//! Gemini HTTP client for text generation.
//!
//! Talks to the `generateContent` REST endpoint with a blocking client and
//! maps every failure onto a distinct [`AIError`].

use super::response::{parse_remote, RemoteKind, RemoteResult};
use crate::config::Config;
use crate::constants::REMOTE_REQUEST_TIMEOUT_SECS;
use crate::errors::{AIError, AppResult};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use tracing::debug;

/// Sampling parameters sent as `generationConfig`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,
}

impl GenerationOptions {
    /// Higher-variance sampling used for random wisdom.
    pub const fn creative() -> Self {
        GenerationOptions {
            temperature: Some(0.9),
            top_p: Some(0.8),
            top_k: Some(40),
        }
    }

    fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.top_p.is_none() && self.top_k.is_none()
    }
}

#[derive(Debug, Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

/// Request body for `generateContent`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationOptions>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

/// Response body from `generateContent`.
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}

/// Client for the Gemini generative language API.
pub struct GeminiClient {
    base_url: String,
    api_key: String,
    model: String,
    client: Client,
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .finish()
    }
}

impl GeminiClient {
    /// Creates a new Gemini client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root (e.g., "https://generativelanguage.googleapis.com")
    /// * `api_key` - Gemini API key
    /// * `model` - Model name (e.g., "gemini-1.5-flash")
    ///
    /// # Errors
    ///
    /// Returns `AIError::NotConfigured` if the key is blank, or
    /// `AIError::Unreachable` if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> AppResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(AIError::NotConfigured.into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REMOTE_REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(AIError::Unreachable)?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            model: model.into(),
            client,
        })
    }

    /// Builds a client from the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `AIError::NotConfigured` when no API key is set.
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let api_key = config.gemini_api_key.as_deref().ok_or(AIError::NotConfigured)?;
        Self::new(&config.gemini_api_url, api_key, &config.gemini_model)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    /// Sends `prompt` and returns the first candidate's text.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the API cannot be reached (`AIError::Unreachable`)
    /// - the key is rejected (`AIError::InvalidApiKey`)
    /// - usage limits are hit (`AIError::QuotaExceeded`)
    /// - the response is not a usable generation (`AIError::InvalidResponse`)
    pub fn generate(&self, prompt: &str, options: GenerationOptions) -> AppResult<String> {
        debug!("Sending generation request with model: {}", self.model);

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![TextPart { text: prompt }],
            }],
            generation_config: (!options.is_empty()).then_some(options),
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .map_err(AIError::Unreachable)?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().unwrap_or_default();
            return Err(classify_failure(status, &error_text).into());
        }

        let body: GenerateResponse = response.json().map_err(|e| {
            AIError::InvalidResponse(format!("Failed to parse generation response: {}", e))
        })?;

        let text = body
            .into_text()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| AIError::InvalidResponse("Response contained no text".to_string()))?;

        debug!(chars = text.len(), "Received generation response");
        Ok(text)
    }
}

impl GeminiClient {
    /// Sends `prompt` for a call site expecting `kind` and parses the answer
    /// into the matching [`RemoteResult`] variant.
    ///
    /// # Errors
    ///
    /// Returns any error of [`GeminiClient::generate`], or a `ParseError`
    /// when the answer does not fit the shape of `kind`.
    pub fn request(&self, kind: RemoteKind, prompt: &str) -> AppResult<RemoteResult> {
        let text = self.generate(prompt, kind.generation_options())?;
        let result = parse_remote(kind, &text)?;
        debug!(kind = kind.as_str(), "parsed remote response");
        Ok(result)
    }
}

/// Maps a non-success HTTP answer onto the matching error.
fn classify_failure(status: StatusCode, body: &str) -> AIError {
    if body.contains("API_KEY_INVALID") {
        AIError::InvalidApiKey
    } else if status == StatusCode::TOO_MANY_REQUESTS
        || body.contains("QUOTA_EXCEEDED")
        || body.contains("RESOURCE_EXHAUSTED")
    {
        AIError::QuotaExceeded
    } else {
        AIError::InvalidResponse(format!("HTTP {}: {}", status, body))
    }
}
