//! Library API: authors and books over HTTP, stored in SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::AppConfig;
pub use error::{AppError, ConfigError};
pub use model::{Author, AuthorCreate, Book, BookCreate, BookQuery, Pagination};
pub use routes::{app, ApiDoc, API_PREFIX};
pub use service::{AuthorService, BookService};
pub use state::AppState;
pub use store::{connect, ensure_tables};
