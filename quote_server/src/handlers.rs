//! HTTP request handlers.
//!
//! Each handler decodes its inputs, makes exactly one call into the shared
//! `QuoteStore`, and encodes the outcome. Bodies are taken as raw bytes and decoded
//! with serde_json directly, so a missing or unusual `Content-Type` never changes the
//! result: a body either parses into a `Quote` or the request is a 400.

use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use log::{debug, info};
use quote_common::Quote;

use crate::error::ApiError;
use crate::model::store::QuoteStore;

/// Store handle shared by every handler.
pub type SharedStore = Arc<QuoteStore>;

/// Parse the `{id}` path segment.
///
/// Reads an optional sign followed by leading decimal digits, after skipping leading
/// whitespace; trailing characters are ignored. Input without digits, or a value that
/// does not fit in `i64`, yields 0, an id no record ever has, so such requests end in
/// 404 rather than 400.
pub fn parse_id(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    let digits = &rest[..digits_len];
    let parsed = if negative {
        format!("-{}", digits).parse::<i64>()
    } else {
        digits.parse::<i64>()
    };
    parsed.unwrap_or(0)
}

/// GET /quotes - List every quote in insertion order.
pub async fn list_quotes(State(store): State<SharedStore>) -> Result<Json<Vec<Quote>>, ApiError> {
    let quotes = store.list()?;
    debug!("Listing {} quotes", quotes.len());
    Ok(Json(quotes))
}

/// GET /quotes/{id} - Fetch one quote.
pub async fn get_quote(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
) -> Result<Json<Quote>, ApiError> {
    let id = parse_id(&raw_id);
    debug!("Fetching quote {}", id);
    Ok(Json(store.get(id)?))
}

/// POST /quotes - Create a quote; the server assigns `id` and `addedAt`.
pub async fn create_quote(
    State(store): State<SharedStore>,
    body: Bytes,
) -> Result<(StatusCode, Json<Quote>), ApiError> {
    let candidate = Quote::from_json_slice(&body)?;
    let quote = store.create(candidate)?;
    info!("Created quote {} by {:?}", quote.id, quote.author);
    Ok((StatusCode::CREATED, Json(quote)))
}

/// PUT /quotes/{id} - Replace a quote, keeping its id.
///
/// The body is decoded before the lookup, so a malformed body is a 400 even when the
/// id does not exist.
pub async fn update_quote(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<Quote>, ApiError> {
    let id = parse_id(&raw_id);
    let candidate = Quote::from_json_slice(&body)?;
    let quote = store.update(id, candidate)?;
    info!("Updated quote {}", id);
    Ok(Json(quote))
}

/// DELETE /quotes/{id} - Remove a quote.
pub async fn delete_quote(
    State(store): State<SharedStore>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id);
    store.delete(id)?;
    info!("Deleted quote {}", id);
    Ok(StatusCode::NO_CONTENT)
}
