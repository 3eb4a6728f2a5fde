//! The external text-generation boundary and the Gemini implementation.

use async_trait::async_trait;
use serde_json::{Value, json};
use thiserror::Error;
use tracing::{debug, warn};

use pgc_core::FinancialRecord;
use pgc_core::calculations::Indicators;

use crate::prompt::build_prompt;
use crate::schema::{AnalysisResponse, response_schema};

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-3-pro-preview";

/// The single, undifferentiated failure of an analysis request.
///
/// Network trouble, a non-success status, an empty candidate list, and a
/// schema-violating body all collapse into this one error: callers only
/// inform the user and offer a manual retry, so no finer taxonomy is
/// exposed.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("analysis request failed: {reason}")]
pub struct AnalysisError {
    reason: String,
}

impl AnalysisError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<reqwest::Error> for AnalysisError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<serde_json::Error> for AnalysisError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(err.to_string())
    }
}

/// A generative text service that can honour a structured-output schema.
///
/// The production implementation is [`GeminiModel`]; tests substitute a
/// canned responder.
#[async_trait]
pub trait TextModel: Send + Sync {
    /// Generates the raw response text for `prompt`, constrained to
    /// `schema`.
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String, AnalysisError>;
}

/// Gemini `generateContent` client.
pub struct GeminiModel {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiModel {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Overrides the model name (e.g. `gemini-1.5-flash`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl TextModel for GeminiModel {
    async fn generate(&self, prompt: &str, schema: &Value) -> Result<String, AnalysisError> {
        let url = format!(
            "{GEMINI_ENDPOINT}/{}:generateContent?key={}",
            self.model, self.api_key
        );

        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema
            }
        });

        debug!(model = %self.model, "requesting analysis");
        let response = self.http.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            warn!(%status, "analysis service returned an error");
            return Err(AnalysisError::new(format!("service error {status}: {detail}")));
        }

        let payload: Value = response.json().await?;
        let text = payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| AnalysisError::new("empty response from service"))?;

        Ok(text.to_string())
    }
}

/// Models occasionally wrap the JSON body in markdown fences despite the
/// structured-output request; strip them before parsing.
fn strip_markdown_fences(text: &str) -> &str {
    text.trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
}

/// Requests a narrative analysis of one period from the text service.
///
/// Builds the prompt, performs a single fresh invocation (no caching, no
/// retry), and parses the returned text strictly against
/// [`AnalysisResponse`]. Any failure along the way (transport, service
/// status, empty body, malformed or schema-violating JSON) surfaces as
/// one opaque [`AnalysisError`].
pub async fn analyze_financial_health(
    model: &dyn TextModel,
    record: &FinancialRecord,
    indicators: &Indicators,
) -> Result<AnalysisResponse, AnalysisError> {
    let prompt = build_prompt(record, indicators);
    let schema = response_schema();

    let text = model.generate(&prompt, &schema).await?;
    let response = serde_json::from_str(strip_markdown_fences(&text))?;

    debug!(period = %record.period, "analysis parsed");
    Ok(response)
}
