//! Mapping from resource errors to HTTP responses.

use crate::student_actor::StudentError;
use crate::teacher_actor::TeacherError;
use crate::user_actor::UserError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Error returned by every handler. Bodies are `{"detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 404 with the message as detail.
    #[error("{0}")]
    NotFound(String),

    /// 409 with the message as detail.
    #[error("{0}")]
    Conflict(String),

    /// 500. The cause is logged, never sent.
    #[error("{0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(detail) => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": detail }))).into_response()
            }
            ApiError::Conflict(detail) => {
                (StatusCode::CONFLICT, Json(json!({ "detail": detail }))).into_response()
            }
            ApiError::Internal(cause) => {
                error!(error = %cause, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<StudentError> for ApiError {
    fn from(e: StudentError) -> Self {
        match e {
            StudentError::NotFound(_) => ApiError::NotFound(e.to_string()),
            StudentError::ActorCommunication(cause) => ApiError::Internal(cause),
        }
    }
}

impl From<TeacherError> for ApiError {
    fn from(e: TeacherError) -> Self {
        match e {
            TeacherError::NotFound(_) => ApiError::NotFound(e.to_string()),
            TeacherError::ActorCommunication(cause) => ApiError::Internal(cause),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => ApiError::NotFound(e.to_string()),
            UserError::ActorCommunication(cause) => ApiError::Internal(cause),
            UserError::EmailTaken(_) => ApiError::Conflict(e.to_string()),
        }
    }
}
