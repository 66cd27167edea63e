//!
//! Common types and utilities shared by the quote server and client.
//!
//! This crate aggregates:
//! - `error`: unified error type `QuoteError` used across the workspace.
//! - `result`: handy `Result<T, QuoteError>` alias.
//! - `quote`: the `Quote` record and its JSON helpers.
//! - `palette`: known display color tags.
//! - `api`: error bodies, messages and route paths of the HTTP API.
//! - `net`: networking constants and small helpers.
#![warn(missing_docs)]
pub mod api;
pub mod error;
pub mod net;
pub mod palette;
pub mod quote;
pub mod result;

pub use error::QuoteError;
pub use palette::Palette;
pub use quote::Quote;
pub use result::Result;
