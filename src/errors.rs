use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::api::helpers::err_response;
use crate::core::models::EngineErrorBody;

/// Startup failures. The process never serves traffic after one of these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Rejected deposit bodies. The Display string is what the caller sees.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("offchainId is required and must be a string")]
    OffchainId,

    #[error("userAddress is required and must be a valid address (0x followed by 40 characters)")]
    UserAddress,

    #[error("Request body must be a JSON object: {0}")]
    MalformedBody(String),
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Engine request failed with status {}: {}", status_label(.status), .message.as_deref().unwrap_or("no error message"))]
    Upstream {
        status: Option<u16>,
        message: Option<String>,
        envelope: Option<EngineErrorBody>,
    },

    #[error("Failed to reach Engine: {0}")]
    Transport(String),

    #[error("Failed to parse Engine response: {0}")]
    Decode(String),

    #[error("Failed to serialize Engine request body: {0}")]
    Body(String),

    #[error("Invalid Engine request header: {0}")]
    InvalidHeader(String),
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "unknown".to_string(),
    }
}

impl From<reqwest::Error> for EngineError {
    fn from(error: reqwest::Error) -> Self {
        EngineError::Transport(error.to_string())
    }
}

/// Terminal error of the deposit route.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Engine response did not include a queueId")]
    MissingQueueId,
}

impl RelayError {
    /// HTTP status for the response. Upstream statuses pass through when they
    /// are client or server errors; anything else collapses to 500.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::Validation(_) => StatusCode::BAD_REQUEST,
            RelayError::Engine(EngineError::Upstream {
                status: Some(code), ..
            }) if (400..=599).contains(code) => {
                StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            RelayError::Engine(_) | RelayError::MissingQueueId => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Human-readable message: the upstream message when the Engine sent one,
    /// otherwise the error's own description.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            RelayError::Engine(EngineError::Upstream {
                message: Some(message),
                ..
            }) if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        err_response(self.status(), &self.message())
    }
}
