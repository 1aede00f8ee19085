//! Table loading and data source handling.

mod loader;
mod table;

pub use loader::Loader;
pub use table::{SourceMetadata, Table};
