//! Book handlers: list (optionally by author) and create.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ApiJson, ApiQuery, DbSession};
use crate::model::{Book, BookCreate, BookQuery};
use crate::service::BookService;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/v1/books/",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Books in creation order", body = Vec<Book>),
        (status = 400, description = "Malformed query", body = ErrorBody),
    )
)]
pub async fn list_books(
    mut db: DbSession,
    ApiQuery(query): ApiQuery<BookQuery>,
) -> Result<Json<Vec<Book>>, AppError> {
    let books = BookService::list(db.conn().await?, query.page(), query.author_filter()).await?;
    Ok(Json(books))
}

#[utoipa::path(
    post,
    path = "/api/v1/books/",
    tag = "books",
    request_body = BookCreate,
    responses(
        (status = 200, description = "Created book", body = Book),
        (status = 422, description = "Body does not match schema", body = ErrorBody),
        (status = 500, description = "Storage rejected the row, e.g. unknown author_id", body = ErrorBody),
    )
)]
pub async fn create_book(
    mut db: DbSession,
    ApiJson(body): ApiJson<BookCreate>,
) -> Result<Json<Book>, AppError> {
    let book = BookService::create(db.conn().await?, body).await?;
    Ok(Json(book))
}
