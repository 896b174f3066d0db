//! 307 redirects from slash-less paths to their trailing-slash routes.
//! The method and body are preserved, and so is the query string.

use super::API_PREFIX;
use axum::extract::{Path, RawQuery};
use axum::response::Redirect;

fn location(path: String, query: Option<String>) -> Redirect {
    let target = match query {
        Some(q) if !q.is_empty() => format!("{}?{}", path, q),
        _ => path,
    };
    Redirect::temporary(&target)
}

pub(super) async fn to_authors(RawQuery(query): RawQuery) -> Redirect {
    location(format!("{}/authors/", API_PREFIX), query)
}

pub(super) async fn to_author(Path(id): Path<String>, RawQuery(query): RawQuery) -> Redirect {
    location(format!("{}/authors/{}/", API_PREFIX, id), query)
}

pub(super) async fn to_books(RawQuery(query): RawQuery) -> Redirect {
    location(format!("{}/books/", API_PREFIX), query)
}
