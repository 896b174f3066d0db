//! Builds parameterized SELECT and INSERT statements for a fixed table layout.

use super::params::SqlValue;

/// Static description of a table: identifiers are compiled in, never taken from requests.
#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    pub pk: &'static str,
    pub columns: &'static [&'static str],
}

pub const AUTHORS: Table = Table {
    name: "authors",
    pk: "id",
    columns: &["id", "name", "bio"],
};

pub const BOOKS: Table = Table {
    name: "books",
    pk: "id",
    columns: &["id", "title", "summary", "publication_date", "author_id"],
};

fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list(table: &Table) -> String {
    table
        .columns
        .iter()
        .map(|c| quoted(c))
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }
}

/// SELECT by primary key. Caller binds the id as the sole param.
pub fn select_by_id(table: &Table) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ?",
        column_list(table),
        quoted(table.name),
        quoted(table.pk)
    );
    q
}

/// SELECT in primary-key order with exact-match filters, then LIMIT/OFFSET.
/// SQLite needs a LIMIT before OFFSET, so an offset without a limit uses `LIMIT -1`.
pub fn select_list(
    table: &Table,
    filters: &[(&str, SqlValue)],
    limit: Option<i64>,
    offset: Option<i64>,
) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!("SELECT {} FROM {}", column_list(table), quoted(table.name));
    if !filters.is_empty() {
        let clauses: Vec<String> = filters
            .iter()
            .map(|(col, v)| {
                q.params.push(v.clone());
                format!("{} = ?", quoted(col))
            })
            .collect();
        q.sql.push_str(" WHERE ");
        q.sql.push_str(&clauses.join(" AND "));
    }
    q.sql.push_str(&format!(" ORDER BY {}", quoted(table.pk)));
    match (limit, offset) {
        (Some(limit), Some(offset)) => {
            q.sql.push_str(" LIMIT ? OFFSET ?");
            q.params.push(SqlValue::I64(limit));
            q.params.push(SqlValue::I64(offset));
        }
        (Some(limit), None) => {
            q.sql.push_str(" LIMIT ?");
            q.params.push(SqlValue::I64(limit));
        }
        (None, Some(offset)) => {
            q.sql.push_str(" LIMIT -1 OFFSET ?");
            q.params.push(SqlValue::I64(offset));
        }
        (None, None) => {}
    }
    q
}

/// INSERT one row with the given columns; the primary key is left to the database.
pub fn insert(table: &Table, values: Vec<(&str, SqlValue)>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(values.len());
    let mut placeholders = Vec::with_capacity(values.len());
    for (col, v) in values {
        cols.push(quoted(col));
        placeholders.push("?");
        q.params.push(v);
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({})",
        quoted(table.name),
        cols.join(", "),
        placeholders.join(", ")
    );
    q
}
