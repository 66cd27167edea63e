//! HTTP API payloads and paths shared by client and server.
//!
//! Error responses are always `{"error": "<message>"}` with one of the fixed messages
//! below. Route paths are built here so both sides agree on them.
use serde::{Deserialize, Serialize};

/// Collection route.
pub const QUOTES_PATH: &str = "/quotes";
/// Message sent with 404 responses.
pub const NOT_FOUND_MESSAGE: &str = "Quote not found";
/// Message sent with 400 responses.
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";
/// Message sent with 500 responses.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

/// JSON error body returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorBody {
    /// Creates a new error body with the given message.
    pub fn new(message: &str) -> Self {
        ErrorBody {
            error: String::from(message),
        }
    }
}

/// Path of a single quote, e.g. `/quotes/3`.
pub fn quote_path(id: i64) -> String {
    format!("{}/{}", QUOTES_PATH, id)
}
