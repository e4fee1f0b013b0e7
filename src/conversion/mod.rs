//! Neo4j to Neptune conversion module
//!
//! This module contains the batch assembler, row normalization,
//! configuration, and run reports.

pub mod batch;
pub mod config;
pub mod engine;
pub mod normalize;
pub mod path_mapping;
pub mod stats;

pub use config::{ConverterConfig, DEFAULT_BATCH_SIZE};

pub use engine::{convert_directory, convert_to_neptune, Converter};
pub use stats::{BatchReport, ConversionReport, GroupReport, GroupStatus};

/// Result type for conversion operations
pub use crate::error::ConversionResult;
