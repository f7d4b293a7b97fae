//! Typed API errors and the terminal error reporter.
//!
//! Every failure a handler can signal is an [`ApiError`]; the single
//! [`IntoResponse`] impl at the bottom turns it into a structured
//! `{"message": ...}` JSON body with the matching status code. Nothing else
//! in the crate writes error responses.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use metrics::counter;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::metrics::{METRIC_NOT_FOUND_RESPONSES, METRIC_VALIDATION_REJECTIONS};

/// Result alias for handler and component code.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Unified error type for the product API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The referenced product does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A write payload or query parameter failed validation.
    #[error("{0}")]
    Validation(String),

    /// Unexpected internal fault; reported generically, never leaked.
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Not-found error for a product id.
    pub fn product_not_found(id: &str) -> Self {
        ApiError::NotFound(format!("product {id} not found"))
    }
}

/// Malformed JSON bodies are a caller error, reported as validation failures.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(format!("invalid request body: {}", rejection.body_text()))
    }
}

/// Malformed query strings (e.g. non-numeric `page`) are rejected, not coerced.
impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(format!("invalid query parameters: {}", rejection.body_text()))
    }
}

/// JSON error body shape shared by all failure responses.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(message) => {
                counter!(METRIC_NOT_FOUND_RESPONSES).increment(1);
                (StatusCode::NOT_FOUND, message)
            }
            ApiError::Validation(message) => {
                counter!(METRIC_VALIDATION_REJECTIONS).increment(1);
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::Internal(err) => {
                error!(error = %err, "internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
