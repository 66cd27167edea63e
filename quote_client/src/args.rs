//! Command-line arguments for the Quote Client.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::{Parser, Subcommand, ValueEnum};
use quote_common::net::DEFAULT_SERVER_URL;
use quote_common::{Palette, Quote};

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Base URL of the quote server.
    #[clap(long, default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Operation to perform.
    #[command(subcommand)]
    pub command: Action,
}

/// Operations supported by the client, one per server route plus `random`.
#[derive(Debug, Subcommand)]
pub enum Action {
    /// Print every quote.
    List,
    /// Print one quote by id.
    Get {
        /// Quote id.
        id: i64,
    },
    /// Add a new quote.
    Add {
        #[command(flatten)]
        fields: QuoteFields,
    },
    /// Replace an existing quote. The whole record is overwritten, not merged.
    Update {
        /// Quote id.
        id: i64,
        #[command(flatten)]
        fields: QuoteFields,
        /// Creation timestamp to keep (RFC3339); dropped when omitted.
        #[clap(long)]
        added_at: Option<String>,
    },
    /// Delete a quote by id.
    Delete {
        /// Quote id.
        id: i64,
    },
    /// Print one quote picked at random.
    Random,
}

/// Editable quote fields.
#[derive(Debug, clap::Args)]
pub struct QuoteFields {
    /// Quote text.
    #[clap(long)]
    pub text: String,
    /// Quote author.
    #[clap(long)]
    pub author: String,
    /// Quote category.
    #[clap(long)]
    pub category: String,
    /// Card color. When omitted, `add` picks a random palette entry and `update`
    /// sends it empty.
    #[clap(long, value_enum)]
    pub color: Option<Palette>,
}

impl QuoteFields {
    /// Build a create payload, choosing a random color if none was given.
    pub fn to_new_quote(&self) -> Quote {
        let color = self.color.unwrap_or_else(Palette::random);
        Quote::draft(&self.text, &self.author, &self.category, color)
    }

    /// Build a full-replacement payload. An omitted `--color` is sent empty, as is an
    /// omitted `added_at`.
    pub fn to_replacement(&self, added_at: Option<String>) -> Quote {
        Quote {
            text: self.text.clone(),
            author: self.author.clone(),
            category: self.category.clone(),
            color: self.color.map(|c| c.to_string()).unwrap_or_default(),
            added_at: added_at.unwrap_or_default(),
            ..Quote::default()
        }
    }
}

/// Human-readable name of a color tag: the palette name for known tags, the raw tag
/// otherwise.
pub fn color_label(tag: &str) -> String {
    Palette::from_tag(tag)
        .and_then(|p| p.to_possible_value())
        .map(|v| v.get_name().to_string())
        .unwrap_or_else(|| tag.to_string())
}
