//! Error types for the Gateway

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use pitchforge_core::DeckError;
use pitchforge_pptx::PptxError;
use thiserror::Error;

/// Gateway error type
///
/// Everything a handler can fail with, mapped onto HTTP statuses:
/// caller mistakes are 400, upstream generation failures 502, assembly
/// and everything else 500. The body is always `{"error": message}`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Deck(#[from] DeckError),

    #[error("PPTX export failed: {0}")]
    Pptx(#[from] PptxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Serialization(e.to_string())
    }
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Deck(e) => match e {
                DeckError::MissingFields { .. }
                | DeckError::BlankStartupName
                | DeckError::UnknownSection { .. }
                | DeckError::EmptyDeck => StatusCode::BAD_REQUEST,
                DeckError::Transport(_)
                | DeckError::ServiceStatus { .. }
                | DeckError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
                DeckError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ApiError::Pptx(_)
            | ApiError::Io(_)
            | ApiError::Serialization(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

/// Result type for Gateway operations
pub type Result<T> = std::result::Result<T, ApiError>;
