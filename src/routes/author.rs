use super::redirect::{to_author, to_authors};
use crate::handlers::{create_author, list_authors, read_author};
use crate::state::AppState;
use axum::{routing::get, Router};

/// `/authors/` and `/authors/:id/`, relative to the API prefix. The slash-less
/// forms redirect to them.
pub fn author_routes(state: AppState) -> Router {
    Router::new()
        .route("/authors/", get(list_authors).post(create_author))
        .route("/authors/:id/", get(read_author))
        .route("/authors", get(to_authors).post(to_authors))
        .route("/authors/:id", get(to_author))
        .with_state(state)
}
