//! Error-to-response mapping
//!
//! Outcomes map to status by error class: Validation -> 400, NotFound ->
//! 404, Internal -> 500. Every failure body is `{"error": detail}` and
//! store faults are caught here at the handler boundary - never left to
//! crash the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dialtree_core::{ErrorClass, MenuError};
use serde_json::json;
use tracing::{error, warn};

/// Error wrapper carrying a core error across the handler boundary
#[derive(Debug)]
pub struct ApiError(pub MenuError);

impl ApiError {
    /// Store mutex was poisoned by a panicking handler
    pub fn lock_poisoned() -> Self {
        ApiError(MenuError::Persistence {
            message: "store lock poisoned".to_string(),
        })
    }
}

impl From<MenuError> for ApiError {
    fn from(err: MenuError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.class() {
            ErrorClass::Validation => StatusCode::BAD_REQUEST,
            ErrorClass::NotFound => StatusCode::NOT_FOUND,
            ErrorClass::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        match status {
            StatusCode::INTERNAL_SERVER_ERROR => error!(err = %self.0, "request failed"),
            _ => warn!(err = %self.0, status = %status, "request rejected"),
        }

        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}
