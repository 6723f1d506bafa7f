use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};

use crate::chirps::validation::ChirpBodyError;

/// Error taxonomy for the HTTP surface. Each variant maps to exactly one
/// status code; internal detail never reaches the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request body")]
    Decode,
    #[error(transparent)]
    Validation(#[from] ChirpBodyError),
    #[error("{0}")]
    BadRequest(&'static str),
    /// Uniform for unknown email, wrong password and malformed stored
    /// hash, so a caller cannot tell which check failed.
    #[error("Invalid credentials")]
    Unauthorized,
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Decode | ApiError::Validation(_) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(ref source) => {
                error!(error = ?source, "request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Unwrap a JSON extractor result, mapping any rejection to a 400. Axum
/// would otherwise answer shape mismatches with 422.
pub fn decode_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            warn!(error = %rejection, "malformed request body");
            Err(ApiError::Decode)
        }
    }
}
