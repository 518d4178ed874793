use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("endpoint returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn is_config(&self) -> bool {
        matches!(self, AppError::Config(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, AppError::Parse(_) | AppError::Json(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_) | AppError::Http { .. })
    }
}

impl From<gloo_net::Error> for AppError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => AppError::Json(e),
            other => AppError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_kinds() {
        assert!(AppError::Config("no key".into()).is_config());
        assert!(AppError::Parse("bad".into()).is_parse());
        assert!(AppError::Http {
            status: 503,
            body: String::new()
        }
        .is_transport());

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: AppError = json_err.into();
        assert!(err.is_parse());
        assert!(!err.is_transport());
    }
}
