use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Map, Value};
use thiserror::Error;

use crate::auth::AuthError;
use crate::llm_client::LlmError;

const TOO_MANY_REQUESTS: u16 = 429;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),

    #[error("認証が必要です")]
    Unauthorized,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Text generation failed (status {status:?}): {body}")]
    Upstream { status: Option<u16>, body: String },

    #[error("Failed to parse collaborator response as JSON: {reason}")]
    UpstreamMalformed { reason: String, raw: String },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        let message = err.to_string();
        match err {
            LlmError::MissingApiKey => AppError::Configuration(message),
            LlmError::Api { status, body } => AppError::Upstream {
                status: Some(status),
                body,
            },
            LlmError::Http(e) => AppError::Upstream {
                status: e.status().map(|s| s.as_u16()),
                body: e.to_string(),
            },
            LlmError::EmptyContent => AppError::Upstream {
                status: None,
                body: message,
            },
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        tracing::warn!("Authentication failed: {err}");
        AppError::Unauthorized
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Unauthorized => "UNAUTHORIZED",
            AppError::Configuration(_) => "CONFIGURATION_ERROR",
            AppError::Upstream {
                status: Some(TOO_MANY_REQUESTS),
                ..
            } => "QUOTA_EXCEEDED",
            AppError::Upstream { .. } => "UPSTREAM_ERROR",
            AppError::UpstreamMalformed { .. } => "UPSTREAM_MALFORMED",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = Map::new();

        let message = match &self {
            AppError::BadRequest(_) | AppError::Unauthorized => self.to_string(),
            AppError::Configuration(msg) => {
                tracing::error!("Configuration error: {msg}");
                self.to_string()
            }
            AppError::Upstream { status, body: text } => {
                tracing::error!("Text generation error: status={status:?} body={text}");
                body.insert("details".to_string(), json!(text));
                "Text generation request failed".to_string()
            }
            AppError::UpstreamMalformed { reason, raw } => {
                tracing::error!("Malformed collaborator response: {reason}");
                body.insert("details".to_string(), json!(reason));
                body.insert("rawContent".to_string(), json!(raw));
                "Failed to parse collaborator response as JSON".to_string()
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                "A database error occurred".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "An internal server error occurred".to_string()
            }
        };

        body.insert("error".to_string(), json!(message));
        body.insert("code".to_string(), json!(self.code()));

        (status, Json(Value::Object(body))).into_response()
    }
}
