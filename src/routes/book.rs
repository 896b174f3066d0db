use super::redirect::to_books;
use crate::handlers::{create_book, list_books};
use crate::state::AppState;
use axum::{routing::get, Router};

/// `/books/`, relative to the API prefix; `/books` redirects to it.
/// There is no per-book detail route.
pub fn book_routes(state: AppState) -> Router {
    Router::new()
        .route("/books/", get(list_books).post(create_book))
        .route("/books", get(to_books).post(to_books))
        .with_state(state)
}
