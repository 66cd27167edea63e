//! Domain models for the quote server.
//!
//! - `store`: the mutex-guarded `QuoteStore` and its five operations.
//! - `seed`: the quotes a fresh store is populated with.

pub mod seed;
pub mod store;
