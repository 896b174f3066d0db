//! Author handlers: list, create, read.

use crate::error::{AppError, ErrorBody};
use crate::extractors::{ApiJson, ApiPath, ApiQuery, DbSession};
use crate::model::{Author, AuthorCreate, Pagination};
use crate::service::AuthorService;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/v1/authors/",
    tag = "authors",
    params(Pagination),
    responses(
        (status = 200, description = "Authors in creation order", body = Vec<Author>),
        (status = 400, description = "Malformed query", body = ErrorBody),
    )
)]
pub async fn list_authors(
    mut db: DbSession,
    ApiQuery(page): ApiQuery<Pagination>,
) -> Result<Json<Vec<Author>>, AppError> {
    let authors = AuthorService::list(db.conn().await?, page).await?;
    Ok(Json(authors))
}

#[utoipa::path(
    post,
    path = "/api/v1/authors/",
    tag = "authors",
    request_body = AuthorCreate,
    responses(
        (status = 200, description = "Created author", body = Author),
        (status = 422, description = "Body does not match schema", body = ErrorBody),
    )
)]
pub async fn create_author(
    mut db: DbSession,
    ApiJson(body): ApiJson<AuthorCreate>,
) -> Result<Json<Author>, AppError> {
    let author = AuthorService::create(db.conn().await?, body).await?;
    Ok(Json(author))
}

#[utoipa::path(
    get,
    path = "/api/v1/authors/{id}/",
    tag = "authors",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 200, description = "The author", body = Author),
        (status = 404, description = "No author with this id", body = ErrorBody),
    )
)]
pub async fn read_author(mut db: DbSession, ApiPath(id): ApiPath<i64>) -> Result<Json<Author>, AppError> {
    let author = AuthorService::get(db.conn().await?, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Author with id {} not found!", id)))?;
    Ok(Json(author))
}
