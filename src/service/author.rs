//! Author queries.

use super::crud::{execute_insert, query_by_id, query_many};
use crate::error::AppError;
use crate::model::{Author, AuthorCreate, Pagination};
use crate::sql::{insert, select_by_id, select_list, SqlValue, AUTHORS};
use sqlx::SqliteConnection;

pub struct AuthorService;

impl AuthorService {
    /// Authors in id order, paged by `page` (zero values ignored).
    pub async fn list(conn: &mut SqliteConnection, page: Pagination) -> Result<Vec<Author>, AppError> {
        let q = select_list(&AUTHORS, &[], page.limit(), page.offset());
        query_many(conn, &q).await
    }

    /// Insert, then reload by the generated id.
    pub async fn create(conn: &mut SqliteConnection, input: AuthorCreate) -> Result<Author, AppError> {
        let q = insert(
            &AUTHORS,
            vec![("name", SqlValue::from(input.name)), ("bio", SqlValue::from(input.bio))],
        );
        let id = execute_insert(conn, &q).await?;
        tracing::info!(author_id = id, "author created");
        Self::get(conn, id)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    pub async fn get(conn: &mut SqliteConnection, id: i64) -> Result<Option<Author>, AppError> {
        query_by_id(conn, &select_by_id(&AUTHORS), id).await
    }
}
