//! OpenAPI document for the author and book endpoints.

use crate::error::{ErrorBody, ErrorDetail};
use crate::handlers;
use crate::model::{Author, AuthorCreate, Book, BookCreate};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "Library API"),
    paths(
        handlers::author::list_authors,
        handlers::author::create_author,
        handlers::author::read_author,
        handlers::book::list_books,
        handlers::book::create_book,
    ),
    components(schemas(Author, AuthorCreate, Book, BookCreate, ErrorBody, ErrorDetail)),
    tags(
        (name = "authors", description = "Authors"),
        (name = "books", description = "Books, filterable by author"),
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// `/openapi.json`, relative to the API prefix.
pub fn docs_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}
