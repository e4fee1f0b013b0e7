//! Parsing of the Neo4j-style graph export
//!
//! The upstream writer emits, per entity type, one tab-separated header file
//! and any number of headerless partition files sharing that header.

pub mod directory;
pub mod filter;
pub mod header;
pub mod partition;

use std::path::PathBuf;

pub use header::{ElementKind, Header, Kind, SystemColumn};
pub use partition::{read_partition, Batch};

use crate::error::ConversionResult;

/// One entity type's exported data: a header file plus its partitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    /// Header file name without the `-header.csv` suffix
    pub base_name: String,
    pub header_path: PathBuf,
    /// Partition files in lexicographic file-name order
    pub partitions: Vec<PathBuf>,
}

impl FileGroup {
    /// Read and parse this group's header file
    pub fn read_header(&self) -> ConversionResult<Header> {
        Header::read(&self.header_path)
    }

    /// Split the partitions into consecutive batches of at most `batch_size` files
    pub fn batches(&self, batch_size: usize) -> std::slice::Chunks<'_, PathBuf> {
        self.partitions.chunks(batch_size.max(1))
    }

    /// Number of batches the partitions split into
    pub fn batch_count(&self, batch_size: usize) -> usize {
        self.partitions.len().div_ceil(batch_size.max(1))
    }

    pub fn has_partitions(&self) -> bool {
        !self.partitions.is_empty()
    }
}
