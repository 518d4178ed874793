use crate::error::{AppError, Result};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_KEY_STORAGE_KEY: &str = "gemini_api_key";
const MODEL_STORAGE_KEY: &str = "gemini_model";

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl AppConfig {
    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(AppError::Config(
                "GEMINI_API_KEY is not set".to_string(),
            )),
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Stored values win over the key baked in at build time.
pub fn resolve(stored_key: Option<String>, stored_model: Option<String>) -> AppConfig {
    let build_key = option_env!("GEMINI_API_KEY").map(str::to_string);
    AppConfig {
        api_key: non_empty(stored_key).or_else(|| non_empty(build_key)),
        model: non_empty(stored_model).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        api_base: DEFAULT_API_BASE.to_string(),
    }
}

fn read_storage(key: &str) -> Option<String> {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(value) = storage.get_item(key) {
                return value;
            }
        }
    }
    None
}

pub fn load_config() -> AppConfig {
    resolve(read_storage(API_KEY_STORAGE_KEY), read_storage(MODEL_STORAGE_KEY))
}
