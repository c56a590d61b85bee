//! API error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::error_handling::{DatabaseError, FetchError};

/// Errors surfaced by the request layer.
///
/// Collaborator failures are caught here and mapped to an HTTP status plus a
/// `{error}` JSON body; the analyzer itself has nothing to catch.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed request input, rejected before analysis.
    #[error("Validation error")]
    Validation(Vec<String>),

    /// No stored analysis with the requested id.
    #[error("Analysis not found")]
    NotFound,

    /// Page retrieval failed; the analysis was aborted and nothing stored.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Unexpected persistence failure, surfaced generically.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(details) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Validation error", "details": details })),
            )
                .into_response(),
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Analysis not found" })),
            )
                .into_response(),
            ApiError::Fetch(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response(),
            ApiError::Database(e) => {
                log::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
