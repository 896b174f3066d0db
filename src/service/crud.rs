//! Statement execution shared by the author and book services.

use crate::error::AppError;
use crate::sql::QueryBuf;
use sqlx::sqlite::SqliteRow;
use sqlx::SqliteConnection;

pub(crate) async fn query_many<T>(conn: &mut SqliteConnection, q: &QueryBuf) -> Result<Vec<T>, AppError>
where
    T: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query_as::<_, T>(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    Ok(query.fetch_all(&mut *conn).await?)
}

pub(crate) async fn query_by_id<T>(
    conn: &mut SqliteConnection,
    q: &QueryBuf,
    id: i64,
) -> Result<Option<T>, AppError>
where
    T: for<'r> sqlx::FromRow<'r, SqliteRow> + Send + Unpin,
{
    tracing::debug!(sql = %q.sql, id, "query");
    let row = sqlx::query_as::<_, T>(&q.sql)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(row)
}

/// Run an INSERT in autocommit mode and return the generated rowid.
pub(crate) async fn execute_insert(conn: &mut SqliteConnection, q: &QueryBuf) -> Result<i64, AppError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "insert");
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = query.bind(p.clone());
    }
    let result = query.execute(&mut *conn).await?;
    Ok(result.last_insert_rowid())
}
