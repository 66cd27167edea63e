//! HTTP mapping of the workspace error type.
//!
//! Handlers return `Result<_, ApiError>`; `ApiError` turns a `QuoteError` into a status
//! code plus a JSON `{"error": ...}` body so nothing escapes the request boundary.
//!
//! - `InvalidPayload` → 400 `Invalid request body`
//! - `NotFound` → 404 `Quote not found`
//! - anything else → 500 `Internal server error`

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};
use quote_common::QuoteError;
use quote_common::api::{ErrorBody, INTERNAL_MESSAGE, INVALID_BODY_MESSAGE, NOT_FOUND_MESSAGE};

/// Error returned from request handlers.
#[derive(Debug)]
pub struct ApiError(pub QuoteError);

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    /// Status code and client-facing message for the wrapped error.
    pub fn status_and_message(&self) -> (StatusCode, &'static str) {
        match &self.0 {
            QuoteError::InvalidPayload(_) => (StatusCode::BAD_REQUEST, INVALID_BODY_MESSAGE),
            QuoteError::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        } else {
            warn!("Request rejected: {}", self.0);
        }
        (status, Json(ErrorBody::new(message))).into_response()
    }
}
