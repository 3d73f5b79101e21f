use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Triplestore error: {0}")]
    Triplestore(String),

    #[error("Malformed triplestore response: {0}")]
    MalformedResponse(String),

    #[error("Invalid query term: {0}")]
    InvalidTerm(String),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for TrackerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            TrackerError::InvalidTerm(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            TrackerError::Http(_)
            | TrackerError::Triplestore(_)
            | TrackerError::MalformedResponse(_) => {
                tracing::error!(error = %self, "Triplestore lookup failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "The triplestore could not be queried".to_string(),
                )
            }
            TrackerError::UrlParse(_)
            | TrackerError::Config(_)
            | TrackerError::Internal(_) => {
                tracing::error!(error = %self, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
