//! Request and response shapes for authors and books.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AuthorCreate {
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub summary: Option<String>,
    /// ISO date, `YYYY-MM-DD`.
    pub publication_date: NaiveDate,
    pub author_id: i64,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct BookCreate {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    pub publication_date: NaiveDate,
    pub author_id: i64,
}

/// `skip`/`limit` query parameters.
///
/// A value of `0` counts as not provided: `limit=0` returns every row and
/// `skip=0` is the same as omitting it. [`Pagination::limit`] and
/// [`Pagination::offset`] apply that rule.
#[derive(Debug, Default, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Rows to skip.
    pub skip: Option<u32>,
    /// Maximum rows to return.
    pub limit: Option<u32>,
}

impl Pagination {
    pub fn new(skip: Option<u32>, limit: Option<u32>) -> Self {
        Pagination { skip, limit }
    }

    pub fn limit(&self) -> Option<i64> {
        non_zero(self.limit).map(i64::from)
    }

    pub fn offset(&self) -> Option<i64> {
        non_zero(self.skip).map(i64::from)
    }
}

/// Query parameters for the book listing.
#[derive(Debug, Default, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Rows to skip.
    pub skip: Option<u32>,
    /// Maximum rows to return.
    pub limit: Option<u32>,
    /// Only books by this author.
    pub author_id: Option<i64>,
}

impl BookQuery {
    pub fn page(&self) -> Pagination {
        Pagination::new(self.skip, self.limit)
    }

    /// Author filter; `0` means no filter.
    pub fn author_filter(&self) -> Option<i64> {
        self.author_id.filter(|id| *id != 0)
    }
}

fn non_zero(v: Option<u32>) -> Option<u32> {
    v.filter(|n| *n != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_pagination_counts_as_absent() {
        let page = Pagination::new(Some(0), Some(0));
        assert_eq!(page.offset(), None);
        assert_eq!(page.limit(), None);

        let page = Pagination::new(Some(3), Some(10));
        assert_eq!(page.offset(), Some(3));
        assert_eq!(page.limit(), Some(10));
    }

    #[test]
    fn zero_author_id_disables_filter() {
        let q = BookQuery {
            author_id: Some(0),
            ..Default::default()
        };
        assert_eq!(q.author_filter(), None);
        let q = BookQuery {
            author_id: Some(4),
            ..Default::default()
        };
        assert_eq!(q.author_filter(), Some(4));
    }

    #[test]
    fn author_create_allows_missing_bio() {
        let body: AuthorCreate = serde_json::from_str(r#"{"name":"A. Author"}"#).unwrap();
        assert_eq!(body.name, "A. Author");
        assert!(body.bio.is_none());
    }

    #[test]
    fn book_create_requires_iso_date() {
        let ok: BookCreate = serde_json::from_str(
            r#"{"title":"T","summary":null,"publication_date":"2020-01-01","author_id":1}"#,
        )
        .unwrap();
        assert_eq!(ok.publication_date, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());

        let bad = serde_json::from_str::<BookCreate>(
            r#"{"title":"T","publication_date":"01/01/2020","author_id":1}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn book_serializes_date_as_iso_string() {
        let book = Book {
            id: 1,
            title: "T".into(),
            summary: None,
            publication_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            author_id: 1,
        };
        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["publication_date"], "2020-01-01");
        assert!(json["summary"].is_null());
    }
}
