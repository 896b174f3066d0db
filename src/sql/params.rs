//! Bind values for SQLite queries.

use chrono::NaiveDate;
use sqlx::encode::{Encode, IsNull};
use sqlx::sqlite::{Sqlite, SqliteTypeInfo};
use sqlx::Database;

/// A value that can be bound to a SQLite query parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Null,
    I64(i64),
    Text(String),
    Date(NaiveDate),
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        SqlValue::I64(n)
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::Text(s)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(d: NaiveDate) -> Self {
        SqlValue::Date(d)
    }
}

impl<T: Into<SqlValue>> From<Option<T>> for SqlValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(SqlValue::Null)
    }
}

impl<'q> Encode<'q, Sqlite> for SqlValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, Box<dyn std::error::Error + Send + Sync>> {
        Ok(match self {
            SqlValue::Null => <Option<i64> as Encode<Sqlite>>::encode_by_ref(&None, buf)?,
            SqlValue::I64(n) => <i64 as Encode<Sqlite>>::encode_by_ref(n, buf)?,
            SqlValue::Text(s) => <String as Encode<Sqlite>>::encode_by_ref(s, buf)?,
            SqlValue::Date(d) => <NaiveDate as Encode<Sqlite>>::encode_by_ref(d, buf)?,
        })
    }
}

impl sqlx::Type<Sqlite> for SqlValue {
    fn type_info() -> SqliteTypeInfo {
        <String as sqlx::Type<Sqlite>>::type_info()
    }
}
