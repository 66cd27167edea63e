//! Route table for the quotes API.
use axum::Router;
use axum::routing::get;

use crate::handlers::{
    SharedStore, create_quote, delete_quote, get_quote, list_quotes, update_quote,
};

/// Build the HTTP router over `store`.
///
/// | Method | Path          | Handler        |
/// |--------|---------------|----------------|
/// | GET    | /quotes       | `list_quotes`  |
/// | POST   | /quotes       | `create_quote` |
/// | GET    | /quotes/{id}  | `get_quote`    |
/// | PUT    | /quotes/{id}  | `update_quote` |
/// | DELETE | /quotes/{id}  | `delete_quote` |
pub fn build_router(store: SharedStore) -> Router {
    Router::new()
        .route("/quotes", get(list_quotes).post(create_quote))
        .route(
            "/quotes/{id}",
            get(get_quote).put(update_quote).delete(delete_quote),
        )
        .with_state(store)
}
