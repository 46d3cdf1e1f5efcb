// src/errors.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown search mode: {0}. Supported modes: CASE_INSENSITIVE, CASE_SENSITIVE, FULL_MATCH")]
    UnknownSearchMode(String),

    #[error("Unknown type: {0}. Supported types: matches, predictions, quiz-games, player-games")]
    UnknownEntityType(String),

    #[error("Invalid id '{0}': expected a numeric identifier")]
    InvalidId(String),

    #[error("The 'id' parameter requires a 'type' parameter")]
    IdWithoutType,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("{kind} document {id} not found")]
    DocumentNotFound { kind: &'static str, id: i64 },

    #[error("Search engine error: {0}")]
    Engine(String),

    #[error("HTTP client error: {0}")]
    HttpClientError(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnknownSearchMode(_)
            | AppError::UnknownEntityType(_)
            | AppError::InvalidId(_)
            | AppError::IdWithoutType
            | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DocumentNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Engine(_)
            | AppError::HttpClientError(_)
            | AppError::Serialization(_)
            | AppError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("❌ Request failed with {}: {}", status, self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        // The message is returned verbatim, engine details included.
        let body = Json(json!({
            "error": self.to_string(),
            "success": false,
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(format!("JSON parsing error: {}", err))
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::HttpClientError(format!("HTTP request failed: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

// Helper conversion functions
impl AppError {
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        AppError::ValidationError(msg.into())
    }

    pub fn engine(msg: impl Into<String>) -> Self {
        AppError::Engine(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::ConfigurationError(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_bad_request() {
        assert_eq!(
            AppError::UnknownSearchMode("bogus".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::IdWithoutType.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::InvalidId("abc".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn missing_document_maps_to_not_found() {
        let err = AppError::DocumentNotFound { kind: "matches", id: 42 };
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "matches document 42 not found");
    }

    #[test]
    fn engine_failures_keep_their_message() {
        let err = AppError::engine("POST /predictions/_search returned 500: boom");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn unknown_mode_message_lists_supported_modes() {
        let message = AppError::UnknownSearchMode("bogus".into()).to_string();
        assert!(message.starts_with("Unknown search mode: bogus"));
        assert!(message.contains("CASE_INSENSITIVE, CASE_SENSITIVE, FULL_MATCH"));
    }
}
