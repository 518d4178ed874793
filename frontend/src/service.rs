use crate::error::{AppError, Result};
use crate::gemini::{GenerationBackend, GenerationRequest};
use crate::models::{CalculatorReport, ChatMessage, FullReport, UserInput};
use crate::prompt;

pub const REPORT_FAILED_MESSAGE: &str =
    "Failed to generate report. The model may have returned an invalid format. Please try again.";
pub const MISSING_KEY_MESSAGE: &str =
    "No API key configured. Set GEMINI_API_KEY at build time or store one under \"gemini_api_key\" in local storage.";
pub const ADVISOR_APOLOGY: &str =
    "Sorry, I encountered an error trying to respond. Please try again.";

/// Banner text shown for a failed report request.
pub fn report_error_message(err: &AppError) -> &'static str {
    if err.is_config() {
        MISSING_KEY_MESSAGE
    } else {
        REPORT_FAILED_MESSAGE
    }
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

/// Structural validation of the model's report body. Anything that does not
/// match the report shape exactly is rejected.
pub fn parse_report(raw: &str) -> Result<FullReport> {
    let body = strip_code_fence(raw);
    serde_json::from_str::<FullReport>(body).map_err(|e| {
        tracing::debug!(raw = %raw, "report body failed to parse");
        AppError::Parse(format!("malformed report JSON: {}", e))
    })
}

pub async fn generate_report(
    backend: &dyn GenerationBackend,
    input: &UserInput,
) -> Result<FullReport> {
    let request = GenerationRequest::json(prompt::report_prompt(input), prompt::report_schema());
    let raw = backend.generate(&request).await?;
    parse_report(&raw)
}

pub async fn advisor_reply(
    backend: &dyn GenerationBackend,
    input: &UserInput,
    report: &CalculatorReport,
    history: &[ChatMessage],
    message: &str,
) -> Result<String> {
    let request = GenerationRequest::text(prompt::advisor_prompt(input, report, history, message));
    let reply = backend.generate(&request).await?;
    Ok(reply.trim().to_string())
}
