//! Error types shared between client and server.
//!
//! The `QuoteError` enum unifies the failure cases of the quote collection: malformed
//! payloads, missing records, I/O while binding or serving, poisoned locks and an
//! exhausted id allocator, so that every crate in the workspace
//! can propagate a single error type.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by client and server.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// I/O error originating from the standard library or sockets.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Request body could not be decoded into a `Quote`.
    #[error("Invalid request body: {0}")]
    InvalidPayload(String),

    /// No quote carries the requested id.
    #[error("Quote not found: {0}")]
    NotFound(i64),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),

    /// Every id up to `i64::MAX` has already been handed out.
    #[error("Quote ids exhausted")]
    IdsExhausted,
}

impl<T> From<PoisonError<T>> for QuoteError {
    fn from(err: PoisonError<T>) -> Self {
        QuoteError::MutexLock(err.to_string())
    }
}
