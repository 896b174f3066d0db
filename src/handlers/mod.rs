//! HTTP handlers for authors and books.

pub mod author;
pub mod book;
pub use author::*;
pub use book::*;
