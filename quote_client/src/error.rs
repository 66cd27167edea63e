//! Error types used across the Quote Client.
//!
//! The `ClientError` enum unifies transport failures and server-side error responses
//! so that they can be propagated easily with `Result<T, ClientError>`.
use thiserror::Error;

/// Unified error type for the client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request could not be sent or the response could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with an error status and `{"error": ...}` body.
    #[error("Server returned {status}: {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message from the error body, or the status reason when the body had none.
        message: String,
    },

    /// Generic formatting error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),
}
