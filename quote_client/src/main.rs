//! Quote Client: a command-line client for the quotes HTTP server. It lists, reads,
//! adds, replaces and deletes quotes, printing results through the logger.
//!
//! Usage example (CLI):
//! ```bash
//! quote_client --server http://127.0.0.1:8080 list
//! quote_client add --text "Stay hungry, stay foolish." --author "Steve Jobs" --category Life
//! quote_client update 2 --text "..." --author "..." --category "..." --color green-teal
//! quote_client delete 5
//! ```
//!
//! `add` picks a random palette color when `--color` is not given.
#![warn(missing_docs)]
mod api;
mod args;
mod error;

use crate::api::QuoteApi;
use crate::args::{Action, Args, color_label};
use crate::error::ClientError;
use clap::Parser;
use log::{error, info};
use quote_common::Quote;

fn main() {
    init_logger();
    let args = Args::parse();
    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), ClientError> {
    let api = QuoteApi::new(&args.server);
    match args.command {
        Action::List => {
            let quotes = api.list()?;
            info!("{} quotes on {}", quotes.len(), args.server);
            quotes.iter().for_each(print_quote);
        }
        Action::Get { id } => print_quote(&api.get(id)?),
        Action::Add { fields } => {
            let created = api.create(&fields.to_new_quote())?;
            info!("Created quote {}", created.id);
            print_quote(&created);
        }
        Action::Update {
            id,
            fields,
            added_at,
        } => {
            let updated = api.update(id, &fields.to_replacement(added_at))?;
            info!("Updated quote {}", updated.id);
            print_quote(&updated);
        }
        Action::Delete { id } => {
            api.delete(id)?;
            info!("Deleted quote {}", id);
        }
        Action::Random => print_quote(&api.random()?),
    }
    Ok(())
}

fn print_quote(quote: &Quote) {
    info!(
        "#{} \"{}\" by {} [{}] color={} added={}",
        quote.id,
        quote.text,
        quote.author,
        quote.category,
        color_label(&quote.color),
        quote.added_at
    );
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
