//! Quotes HTTP service.
//!
//! Serves CRUD operations over one in-memory collection of quotes. The pieces:
//!
//! - `model::store::QuoteStore`: ordered `Vec<Quote>` plus the next id, both behind a
//!   single `Mutex`. Every operation takes the lock for its whole duration.
//! - `handlers`: axum handlers translating HTTP requests into store calls.
//! - `router`: route table wiring the five verbs to the handlers.
//! - `error`: `ApiError`, which converts `QuoteError` into status code + JSON body.
//! - `args`: CLI flags for the listen address and seeding.
//!
//! Nothing is persisted; a restart brings back the seed set.
#![warn(missing_docs)]
pub mod args;
pub mod error;
pub mod handlers;
pub mod model;
pub mod router;

pub use model::store::QuoteStore;
pub use router::build_router;
