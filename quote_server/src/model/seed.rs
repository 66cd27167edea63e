//! Built-in quotes the server starts with.

use quote_common::{Palette, Quote};

use crate::model::store::now_rfc3339;

/// `(text, author, category, color)` of each seed quote, in id order starting at 1.
const SEEDS: [(&str, &str, &str, Palette); 5] = [
    (
        "The only way to do great work is to love what you do.",
        "Steve Jobs",
        "Motivation",
        Palette::PurplePink,
    ),
    (
        "Innovation distinguishes between a leader and a follower.",
        "Steve Jobs",
        "Leadership",
        Palette::BlueCyan,
    ),
    (
        "Design is not just what it looks like and feels like. Design is how it works.",
        "Steve Jobs",
        "Design",
        Palette::GreenTeal,
    ),
    (
        "Your time is limited, so don't waste it living someone else's life.",
        "Steve Jobs",
        "Life",
        Palette::YellowOrange,
    ),
    (
        "Think different.",
        "Apple Inc.",
        "Innovation",
        Palette::RedPink,
    ),
];

/// Build the seed set with ids 1..=5, all stamped with the current time.
pub fn seed_quotes() -> Vec<Quote> {
    let added_at = now_rfc3339();
    SEEDS
        .iter()
        .zip(1..)
        .map(|(&(text, author, category, color), id)| Quote {
            id,
            added_at: added_at.clone(),
            ..Quote::draft(text, author, category, color)
        })
        .collect()
}
