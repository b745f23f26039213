//! HTTP-facing errors.
//!
//! Every variant is an expected per-request outcome. `IntoResponse` turns it
//! into the matching status code with a small JSON body.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use todo_core::{StoreError, TodoId};

/// Errors returned by the todo handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The addressed todo does not exist.
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// The path id or the request body could not be read.
    #[error("{0}")]
    BadRequest(String),

    /// A todo with the requested id already exists.
    #[error("todo {0} already exists")]
    Conflict(TodoId),

    /// The store has no id left to hand out.
    #[error("no todo ids left to assign")]
    IdsExhausted,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) | ApiError::IdsExhausted => StatusCode::CONFLICT,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::IdsExhausted => "IDS_EXHAUSTED",
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(id),
            StoreError::Conflict(id) => ApiError::Conflict(id),
            StoreError::IdsExhausted => ApiError::IdsExhausted,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("invalid request body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(format!("invalid todo id: {}", rejection.body_text()))
    }
}

/// JSON body of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = %status, error = %self, "request rejected");

        let body = ErrorBody {
            code: self.code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
