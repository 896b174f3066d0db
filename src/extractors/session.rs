//! One pooled connection per request, checked out on first use.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection, SqlitePool};

/// Database session scoped to one handler.
///
/// Extraction never touches the pool, so body and query rejections are returned
/// without waiting for a connection. The first [`DbSession::conn`] call checks one
/// out; dropping the session hands it back, whichever way the handler exits.
pub struct DbSession {
    pool: SqlitePool,
    conn: Option<PoolConnection<Sqlite>>,
}

impl DbSession {
    pub fn new(pool: SqlitePool) -> Self {
        DbSession { pool, conn: None }
    }

    /// The session's connection, acquired from the pool on the first call.
    pub async fn conn(&mut self) -> Result<&mut SqliteConnection, AppError> {
        let conn = match self.conn.take() {
            Some(conn) => conn,
            None => {
                let conn = self.pool.acquire().await?;
                tracing::trace!("db session acquired");
                conn
            }
        };
        Ok(&mut **self.conn.insert(conn))
    }

    pub fn is_acquired(&self) -> bool {
        self.conn.is_some()
    }
}

#[async_trait]
impl FromRequestParts<AppState> for DbSession {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(DbSession::new(state.pool.clone()))
    }
}

impl Drop for DbSession {
    fn drop(&mut self) {
        if self.conn.is_some() {
            tracing::trace!("db session released");
        }
    }
}
