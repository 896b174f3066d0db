//! Book queries.

use super::crud::{execute_insert, query_by_id, query_many};
use crate::error::AppError;
use crate::model::{Book, BookCreate, Pagination};
use crate::sql::{insert, select_by_id, select_list, SqlValue, BOOKS};
use sqlx::SqliteConnection;

pub struct BookService;

impl BookService {
    /// Books in id order. `author_id` narrows the rows before paging is applied.
    pub async fn list(
        conn: &mut SqliteConnection,
        page: Pagination,
        author_id: Option<i64>,
    ) -> Result<Vec<Book>, AppError> {
        let filters: Vec<(&str, SqlValue)> = author_id
            .map(|id| ("author_id", SqlValue::I64(id)))
            .into_iter()
            .collect();
        let q = select_list(&BOOKS, &filters, page.limit(), page.offset());
        query_many(conn, &q).await
    }

    /// Insert, then reload by the generated id. A dangling `author_id` fails on the
    /// foreign-key constraint and nothing is written.
    pub async fn create(conn: &mut SqliteConnection, input: BookCreate) -> Result<Book, AppError> {
        let q = insert(
            &BOOKS,
            vec![
                ("title", SqlValue::from(input.title)),
                ("summary", SqlValue::from(input.summary)),
                ("publication_date", SqlValue::from(input.publication_date)),
                ("author_id", SqlValue::from(input.author_id)),
            ],
        );
        let id = execute_insert(conn, &q).await?;
        tracing::info!(book_id = id, author_id = input.author_id, "book created");
        query_by_id(conn, &select_by_id(&BOOKS), id)
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }
}
