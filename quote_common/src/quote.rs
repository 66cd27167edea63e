//! Quote record and request-body decoding.
//!
//! A `Quote` is both the stored record and the request payload for create/update.
//! `addedAt` is left out of the encoded JSON when it is empty.
//!
//! Request bodies go through [`Quote::from_json_slice`], which only accepts a JSON
//! object. Inside it:
//! - missing fields and explicit `null`s decode to the zero value;
//! - field names match exactly first, then without regard to ASCII case;
//! - a repeated key keeps its last value;
//! - unknown fields are ignored.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::QuoteError;
use crate::palette::Palette;

/// Wire names of the decoded fields.
const FIELDS: [&str; 6] = ["id", "text", "author", "category", "color", "addedAt"];

/// A text attribution with display metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Quote {
    /// Unique identifier assigned by the store.
    pub id: i64,
    /// The quoted text.
    pub text: String,
    /// Who said it.
    pub author: String,
    /// Free-form grouping label.
    pub category: String,
    /// Display tag, usually one of the [`Palette`] entries.
    pub color: String,
    /// RFC3339 creation timestamp, empty when unknown.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub added_at: String,
}

impl Quote {
    /// Build a payload without id or timestamp, ready to be sent for creation.
    pub fn draft(text: &str, author: &str, category: &str, color: Palette) -> Self {
        Quote {
            text: text.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            color: color.to_string(),
            ..Quote::default()
        }
    }

    /// Decode a request body.
    ///
    /// Syntax errors, empty bodies, anything other than a JSON object and fields of the
    /// wrong type are reported as [`QuoteError::InvalidPayload`].
    pub fn from_json_slice(body: &[u8]) -> Result<Quote, QuoteError> {
        let object = match serde_json::from_slice::<Value>(body).map_err(invalid)? {
            Value::Object(object) => object,
            other => {
                return Err(QuoteError::InvalidPayload(format!(
                    "expected a JSON object, got {}",
                    kind(&other)
                )));
            }
        };

        let mut fields = Map::new();
        for name in FIELDS {
            let value = object.get(name).or_else(|| {
                object
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, value)| value)
            });
            match value {
                None | Some(Value::Null) => {}
                Some(value) => {
                    fields.insert(name.to_string(), value.clone());
                }
            }
        }
        serde_json::from_value(Value::Object(fields)).map_err(invalid)
    }
}

fn invalid(err: serde_json::Error) -> QuoteError {
    QuoteError::InvalidPayload(err.to_string())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
