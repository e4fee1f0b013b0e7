//! Neo4j to Neptune CSV Converter
//!
//! Converts the Neo4j admin-import CSV export of a graph builder (one
//! tab-separated header file plus partition files per entity type) into the
//! Amazon Neptune bulk-load CSV format, one output file per batch.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod parser;
pub mod schema;

// Re-export commonly used types
pub use conversion::{
    convert_directory, convert_to_neptune, ConversionReport, Converter, ConverterConfig,
    GroupReport, GroupStatus,
};
pub use error::{ConversionError, ConversionErrorKind, ConversionResult, ParseError};
pub use formatter::PropertyType;
pub use parser::{ElementKind, FileGroup, Kind};
pub use schema::SchemaDescription;
