/// LLM Client — the single point of entry for all Gemini API calls in Prepdeck.
///
/// ARCHITECTURAL RULE: No other module may call the generative-language API
/// directly. All completion calls MUST go through this module.
///
/// Model: gemini-2.5-flash (hardcoded — do not make configurable to prevent drift)
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod recovery;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1/models";
/// The model used for all completion calls in Prepdeck.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-2.5-flash";

const TEMPERATURE: f32 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f32 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 8192;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("missing API key — set GEMINI_API_KEY in the environment")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Gemini returned no candidate text")]
    EmptyContent,

    #[error("{0}")]
    Parse(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GeminiRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

/// Response shape of the generateContent endpoint. Every level is defaulted:
/// a response missing candidates or parts deserializes cleanly and surfaces
/// as "no candidate text" rather than a decode failure.
#[derive(Debug, Default, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: CandidateContent,
}

#[derive(Debug, Default, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TextPart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GeminiResponse {
    /// Extracts the text of the first part of the first candidate.
    /// An empty string counts as no text.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .and_then(|p| p.text.as_deref())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The single Gemini client used by all services in Prepdeck.
/// Wraps the generateContent endpoint with JSON-recovery helpers.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
}

impl GeminiClient {
    /// The credential is injected here, never read from the environment at
    /// call time. `None` keeps the service bootable; calls fail fast with
    /// a configuration error before any request is issued.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }

    /// Makes one call to the generateContent endpoint and returns the full
    /// response object. Exactly one request per invocation — no retry, no
    /// timeout beyond the transport defaults; the caller decides whether to
    /// re-invoke on failure.
    pub async fn call(&self, prompt: &str) -> Result<GeminiResponse, LlmError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or(LlmError::MissingApiKey)?;

        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent?key={api_key}");

        let request_body = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self.client.post(&url).json(&request_body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the machine-readable message when the body carries one
            let message = serde_json::from_str::<GeminiErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let gemini_response: GeminiResponse = response.json().await?;

        debug!(
            "Gemini call succeeded: {} candidate(s)",
            gemini_response.candidates.len()
        );

        Ok(gemini_response)
    }

    /// Convenience method that calls the endpoint and decodes the candidate
    /// text as JSON, applying fence-strip/brace-slice recovery first.
    /// The prompt must instruct the model to return raw JSON.
    pub async fn call_json<T: DeserializeOwned>(&self, prompt: &str) -> Result<T, LlmError> {
        let response = self.call(prompt).await?;

        let text = response.text().ok_or(LlmError::EmptyContent)?;

        let value = recovery::extract_json(text)?;

        serde_json::from_value(value).map_err(|e| {
            LlmError::Parse(format!(
                "response JSON did not match the expected shape: {e}"
            ))
        })
    }
}
