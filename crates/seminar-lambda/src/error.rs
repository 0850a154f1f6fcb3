use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use seminar_export::error::PipelineError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The upload could not be read as a CSV file.
    BadRequest(String),
    /// A body extractor refused the request, e.g. 413 over the body limit.
    Rejected { status: StatusCode, message: String },
    /// Extraction or rendering failed; the message is returned to the caller.
    Pipeline(String),
    /// Anything else; logged, with a generic message returned.
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!("rejected upload: {msg}");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Rejected { status, message } => {
                tracing::warn!(status = status.as_u16(), "rejected upload: {message}");
                (status, message)
            }
            ApiError::Pipeline(msg) => {
                tracing::warn!("summary failed: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::Decode(inner) => {
                ApiError::BadRequest(format!("failed to parse uploaded file: {inner}"))
            }
            other => ApiError::Pipeline(other.to_string()),
        }
    }
}

impl From<BytesRejection> for ApiError {
    fn from(e: BytesRejection) -> Self {
        ApiError::Rejected {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(e: MultipartRejection) -> Self {
        ApiError::Rejected {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        ApiError::Rejected {
            status: e.status(),
            message: e.body_text(),
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(format!("summary task failed: {e}"))
    }
}
