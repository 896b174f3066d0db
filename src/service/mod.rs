//! Data access for authors and books. Each call runs on the request's connection.

mod author;
mod book;
mod crud;
pub use author::AuthorService;
pub use book::BookService;
