use async_trait::async_trait;
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::AppConfig;
use crate::error::{AppError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    /// `Some` asks for schema-constrained JSON, `None` for plain text.
    pub response_schema: Option<Value>,
}

impl GenerationRequest {
    pub fn text(prompt: String) -> Self {
        Self {
            prompt,
            response_schema: None,
        }
    }

    pub fn json(prompt: String, schema: Value) -> Self {
        Self {
            prompt,
            response_schema: Some(schema),
        }
    }
}

#[async_trait(?Send)]
pub trait GenerationBackend {
    async fn generate(&self, request: &GenerationRequest) -> Result<String>;
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'static str,
    response_schema: &'a Value,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    contents: Vec<Content<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

fn request_body(request: &GenerationRequest) -> GenerateContentBody<'_> {
    GenerateContentBody {
        contents: vec![Content {
            role: "user",
            parts: vec![Part {
                text: &request.prompt,
            }],
        }],
        generation_config: request
            .response_schema
            .as_ref()
            .map(|schema| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema,
            }),
    }
}

#[derive(Deserialize, Default)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize, Default)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: ResponseContent,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// Pulls the generated text out of a `generateContent` response envelope.
fn extract_text(raw: &str) -> Result<String> {
    let envelope: GenerateContentResponse = serde_json::from_str(raw)?;
    let candidate = envelope
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Parse("response contained no candidates".to_string()))?;

    let text: String = candidate
        .content
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect();
    let text = text.trim();
    if text.is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "unknown".to_string());
        return Err(AppError::Parse(format!(
            "candidate had no text (finish reason: {})",
            reason
        )));
    }
    Ok(text.to_string())
}

pub struct GeminiClient {
    config: AppConfig,
}

impl GeminiClient {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl GenerationBackend for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let api_key = self.config.require_api_key()?;
        let url = self.config.endpoint();
        tracing::debug!(
            model = %self.config.model,
            json_mode = request.response_schema.is_some(),
            "sending generateContent request"
        );

        let resp = Request::post(&url)
            .header("x-goog-api-key", api_key)
            .json(&request_body(request))?
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;
        if !resp.ok() {
            tracing::warn!(status, "generateContent request rejected");
            return Err(AppError::Http { status, body });
        }

        extract_text(&body)
    }
}
