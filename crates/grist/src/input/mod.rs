//! Input loading: byte sources, CSV parsing, table representation.

mod fetch;
mod reader;
mod source;

pub use fetch::{is_url, load_bytes};
pub use reader::{Reader, ReaderConfig};
pub use source::{DataTable, SourceMetadata};
