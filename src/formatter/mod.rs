//! Neptune bulk-load formatting
//!
//! Turns a normalized batch into Neptune's CSV layout: a translated header
//! with typed property columns, followed by the batch rows.

pub mod header;
pub mod types;
pub mod writer;

pub use header::{translate_header, ColumnRole, OutputColumn, TranslatedHeader};
pub use types::{infer_type, PropertyType};
pub use writer::{write_batch, EdgeIdSequence};
