//! In-memory quote collection with a monotonic id allocator.
//!
//! `QuoteStore` keeps quotes in insertion order together with the next id to hand out.
//! Both live behind one `Mutex`; every operation, read or write, holds the guard for its
//! whole body, so callers observe operations in some total order and never a half-applied
//! mutation. The guard is a scoped local and is released on every return path.
//!
//! Operations:
//! - `list()`: snapshot of all quotes in display order.
//! - `get(id)`: linear scan by id.
//! - `create(candidate)`: assigns a fresh id and timestamp, appends.
//! - `update(id, candidate)`: full replacement of everything except `id`.
//! - `delete(id)`: removes one quote, keeping the order of the others.

use std::sync::Mutex;

use chrono::{Local, SecondsFormat};
use log::debug;
use quote_common::{Quote, QuoteError, Result};

use crate::model::seed::seed_quotes;

/// Collection state guarded by the store's lock.
#[derive(Debug)]
struct Inner {
    quotes: Vec<Quote>,
    /// `None` once `i64::MAX` has been handed out.
    next_id: Option<i64>,
}

/// Mutex-protected, ordered collection of quotes.
#[derive(Debug)]
pub struct QuoteStore {
    inner: Mutex<Inner>,
}

impl Default for QuoteStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl QuoteStore {
    /// Create a store holding `quotes` in the given order.
    ///
    /// The id allocator starts one past the highest id present (or at 1 when empty).
    /// If a quote already holds `i64::MAX`, `create` fails with `IdsExhausted`.
    pub fn new(quotes: Vec<Quote>) -> Self {
        let next_id = quotes.iter().map(|q| q.id).max().unwrap_or(0).checked_add(1);
        Self {
            inner: Mutex::new(Inner { quotes, next_id }),
        }
    }

    /// Create a store holding the five built-in quotes, stamped with the current time.
    pub fn seeded() -> Self {
        Self::new(seed_quotes())
    }

    /// Return every quote in insertion order.
    pub fn list(&self) -> Result<Vec<Quote>> {
        let inner = self.inner.lock()?;
        Ok(inner.quotes.clone())
    }

    /// Look up a quote by id.
    pub fn get(&self, id: i64) -> Result<Quote> {
        let inner = self.inner.lock()?;
        inner
            .quotes
            .iter()
            .find(|q| q.id == id)
            .cloned()
            .ok_or(QuoteError::NotFound(id))
    }

    /// Store a new quote.
    ///
    /// Any `id` or `added_at` carried by `candidate` is ignored.
    pub fn create(&self, candidate: Quote) -> Result<Quote> {
        let mut inner = self.inner.lock()?;
        let id = inner.next_id.ok_or(QuoteError::IdsExhausted)?;
        let quote = Quote {
            id,
            added_at: now_rfc3339(),
            ..candidate
        };
        inner.next_id = id.checked_add(1);
        inner.quotes.push(quote.clone());
        debug!("Allocated id {}, next id {:?}", quote.id, inner.next_id);
        Ok(quote)
    }

    /// Replace the quote with `id` by `candidate`, keeping only the id.
    ///
    /// This is a full replace, not a merge: fields missing from the payload come back
    /// empty, including `added_at` unless the caller sends it.
    pub fn update(&self, id: i64, candidate: Quote) -> Result<Quote> {
        let mut inner = self.inner.lock()?;
        let slot = inner
            .quotes
            .iter_mut()
            .find(|q| q.id == id)
            .ok_or(QuoteError::NotFound(id))?;
        *slot = Quote { id, ..candidate };
        Ok(slot.clone())
    }

    /// Remove the quote with `id`.
    pub fn delete(&self, id: i64) -> Result<()> {
        let mut inner = self.inner.lock()?;
        let pos = inner
            .quotes
            .iter()
            .position(|q| q.id == id)
            .ok_or(QuoteError::NotFound(id))?;
        inner.quotes.remove(pos);
        Ok(())
    }

    /// Number of quotes currently stored.
    pub fn len(&self) -> Result<usize> {
        Ok(self.inner.lock()?.quotes.len())
    }

    /// Whether the store holds no quotes.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Current local time as RFC3339 with second precision.
pub(crate) fn now_rfc3339() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}
