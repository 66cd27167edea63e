//! Blocking HTTP client for the quote server.
//!
//! `QuoteApi` wraps a `reqwest` blocking client and maps each server route to a method.
//! Non-success responses are turned into `ClientError::Api` using the server's
//! `{"error": ...}` body when present.
use log::debug;
use quote_common::api::{ErrorBody, QUOTES_PATH, quote_path};
use quote_common::Quote;
use rand::seq::IndexedRandom;
use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};

use crate::error::ClientError;

/// Thin client over the quote server's HTTP routes.
pub struct QuoteApi {
    client: Client,
    base_url: String,
}

impl QuoteApi {
    /// Create a client for the server at `base_url` (e.g. `http://127.0.0.1:8080`).
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /quotes
    pub fn list(&self) -> Result<Vec<Quote>, ClientError> {
        let response = self.client.get(self.url(QUOTES_PATH)).send()?;
        Ok(check(response)?.json()?)
    }

    /// GET /quotes/{id}
    pub fn get(&self, id: i64) -> Result<Quote, ClientError> {
        let response = self.client.get(self.url(&quote_path(id))).send()?;
        Ok(check(response)?.json()?)
    }

    /// POST /quotes
    pub fn create(&self, quote: &Quote) -> Result<Quote, ClientError> {
        let response = self
            .client
            .post(self.url(QUOTES_PATH))
            .json(quote)
            .send()?;
        Ok(check(response)?.json()?)
    }

    /// PUT /quotes/{id}
    pub fn update(&self, id: i64, quote: &Quote) -> Result<Quote, ClientError> {
        let response = self
            .client
            .put(self.url(&quote_path(id)))
            .json(quote)
            .send()?;
        Ok(check(response)?.json()?)
    }

    /// DELETE /quotes/{id}
    pub fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self.client.delete(self.url(&quote_path(id))).send()?;
        check(response)?;
        Ok(())
    }

    /// Fetch the list and pick one quote from it at random.
    pub fn random(&self) -> Result<Quote, ClientError> {
        let quotes = self.list()?;
        pick_random(&quotes)
            .cloned()
            .ok_or_else(|| ClientError::Format("No quotes available".to_string()))
    }
}

/// Pass successful responses through, turn the rest into `ClientError::Api`.
fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes()?;
    debug!("Error response body: {}", String::from_utf8_lossy(&body));
    Err(api_error(status, &body))
}

fn api_error(status: StatusCode, body: &[u8]) -> ClientError {
    let message = serde_json::from_slice::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| status.canonical_reason().unwrap_or("unknown").to_string());
    ClientError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Uniformly random element of `quotes`, `None` when empty.
pub fn pick_random(quotes: &[Quote]) -> Option<&Quote> {
    quotes.choose(&mut rand::rng())
}
