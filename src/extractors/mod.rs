//! Request extractors: database session and error-mapped JSON/query/path.

mod rejection;
mod session;
pub use rejection::{ApiJson, ApiPath, ApiQuery};
pub use session::DbSession;
