//! Error types for the weather service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Weather Error Enum ==
/// Unified error type for the weather service.
///
/// The icon cache has no failure modes of its own; every variant here comes
/// from request validation or the upstream weather API.
#[derive(Error, Debug)]
pub enum WeatherError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Requested resource does not exist upstream
    #[error("Not found: {0}")]
    NotFound(String),

    /// No API key configured for the weather API
    #[error("Weather API key is not configured")]
    MissingApiKey,

    /// Upstream answered with a non-success status
    #[error("Upstream returned {status} for {url}")]
    Upstream { status: u16, url: String },

    /// Transport-level failure talking to upstream
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

// == IntoResponse Implementation ==
impl IntoResponse for WeatherError {
    fn into_response(self) -> Response {
        let status = match &self {
            WeatherError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            WeatherError::NotFound(_) => StatusCode::NOT_FOUND,
            WeatherError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            WeatherError::Upstream { .. }
            | WeatherError::Http(_)
            | WeatherError::Decode(_) => StatusCode::BAD_GATEWAY,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the weather service.
pub type Result<T> = std::result::Result<T, WeatherError>;
