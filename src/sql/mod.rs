//! Safe SQL builder: identifiers from compiled-in table layouts only, values as parameters.

mod builder;
pub mod params;
pub use builder::*;
pub use params::*;
