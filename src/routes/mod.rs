//! Router assembly.

mod author;
mod book;
mod common;
mod docs;
mod redirect;

pub use author::author_routes;
pub use book::book_routes;
pub use common::common_routes;
pub use docs::{docs_routes, ApiDoc};

use crate::state::AppState;
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

pub const API_PREFIX: &str = "/api/v1";

/// Full application: operational routes at the root, entity routes and the
/// OpenAPI document under [`API_PREFIX`].
pub fn app(state: AppState, max_body_bytes: usize) -> Router {
    let api = Router::new()
        .merge(author_routes(state.clone()))
        .merge(book_routes(state.clone()))
        .merge(docs_routes());

    Router::new()
        .merge(common_routes(state))
        .nest(API_PREFIX, api)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http())
}
