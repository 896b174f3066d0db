//! Pool construction and table DDL for `authors` and `books`.

use crate::config::AppConfig;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

const AUTHORS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS authors (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        bio TEXT
    )
"#;

const BOOKS_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        summary TEXT,
        publication_date DATE NOT NULL,
        author_id INTEGER NOT NULL REFERENCES authors (id)
    )
"#;

const BOOKS_AUTHOR_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_books_author_id ON books (author_id)";

/// Open a pool for `config.database_url`. Creates the database file if missing and
/// turns on foreign-key enforcement for every connection.
pub async fn connect(config: &AppConfig) -> Result<SqlitePool, AppError> {
    tracing::info!(
        database_url = %config.database_url,
        max_connections = config.max_connections,
        "opening database pool"
    );
    let mut options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections.max(1));
    if config.is_in_memory() {
        // Each in-memory connection is its own database: keep one alive for the pool's lifetime.
        pool_options = pool_options
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    } else {
        options = options.journal_mode(SqliteJournalMode::Wal);
        pool_options = pool_options.acquire_timeout(Duration::from_secs(30));
    }
    let pool = pool_options.connect_with(options).await?;
    Ok(pool)
}

/// Create `authors` and `books` if they do not exist. Safe to run on every start.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in [AUTHORS_DDL, BOOKS_DDL, BOOKS_AUTHOR_INDEX] {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::debug!("tables ensured");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn ensure_tables_is_idempotent() {
        let pool = connect(&AppConfig::in_memory()).await.unwrap();
        ensure_tables(&pool).await.unwrap();
        ensure_tables(&pool).await.unwrap();
        let names: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('authors', 'books') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();
        assert_eq!(names, vec!["authors".to_string(), "books".to_string()]);
    }

    #[tokio::test]
    async fn foreign_keys_are_enforced() {
        let pool = connect(&AppConfig::in_memory()).await.unwrap();
        let enabled: i64 = sqlx::query_scalar("PRAGMA foreign_keys").fetch_one(&pool).await.unwrap();
        assert_eq!(enabled, 1);
    }
}
