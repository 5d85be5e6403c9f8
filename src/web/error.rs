use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

use crate::error::ReplyError;

/// Body of every error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
    pub code: String,
}

#[derive(Debug)]
pub struct ApiError(pub ReplyError);

impl From<ReplyError> for ApiError {
    fn from(err: ReplyError) -> Self {
        Self(err)
    }
}

impl ApiError {
    pub fn validation(detail: impl Into<String>) -> Self {
        Self(ReplyError::Validation(detail.into()))
    }

    fn status(&self) -> StatusCode {
        match self.0 {
            ReplyError::Validation(_) | ReplyError::UnsupportedPlatform { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ReplyError::Storage(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {:#}", self.0);
        } else {
            warn!("Rejected request: {}", self.0);
        }
        let body = ErrorBody {
            detail: self.0.to_string(),
            code: self.0.code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

fn plain_error(status: StatusCode, detail: &str, code: &str) -> Response {
    let body = ErrorBody {
        detail: detail.to_string(),
        code: code.to_string(),
    };
    (status, Json(body)).into_response()
}

pub async fn not_found() -> Response {
    plain_error(StatusCode::NOT_FOUND, "route not found", "not_found")
}

pub async fn method_not_allowed() -> Response {
    plain_error(
        StatusCode::METHOD_NOT_ALLOWED,
        "method not allowed for this route",
        "method_not_allowed",
    )
}

/// Turns a panicking handler into a 500 with the usual error body.
pub fn internal_error(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("Handler panicked: {}", message);
    plain_error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "An unexpected error occurred",
        "internal_server_error",
    )
}
