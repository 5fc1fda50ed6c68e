use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required parameters: channelName and uid are required")]
    MissingParameters,

    #[error("invalid uid: {0}")]
    InvalidUid(String),

    #[error("Failed to generate token")]
    TokenGeneration { details: String },
}

#[derive(Serialize)]
struct ErrorResponseBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, details) = match &self {
            AppError::MissingParameters | AppError::InvalidUid(_) => {
                (StatusCode::BAD_REQUEST, None)
            }
            AppError::TokenGeneration { details } => {
                (StatusCode::INTERNAL_SERVER_ERROR, Some(details.clone()))
            }
        };

        let body = ErrorResponseBody {
            error: self.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}
