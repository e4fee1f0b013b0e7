//! Loading partition files into in-memory batches

use csv::ReaderBuilder;
use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{ConversionError, ConversionResult};
use crate::parser::Header;

/// Quote character used by the upstream export
pub const DEFAULT_QUOTE: u8 = b'\'';

/// Rows of one or more partitions, aligned to a group header.
///
/// Every row has exactly `columns.len()` cells; empty cells are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Batch {
    pub fn new(header: &Header) -> Self {
        Self {
            columns: header.columns.clone(),
            rows: Vec::new(),
        }
    }

    /// Load and concatenate partitions in the given order
    pub fn load(header: &Header, partitions: &[PathBuf], quote: u8) -> ConversionResult<Self> {
        let mut batch = Self::new(header);
        for path in partitions {
            let rows = read_partition(path, header.len(), quote)?;
            log::debug!("Read {} rows from {}", rows.len(), path.display());
            batch.rows.extend(rows);
        }
        Ok(batch)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Values of one column, top to bottom
    pub fn column(&self, index: usize) -> impl Iterator<Item = Option<&str>> + '_ {
        self.rows.iter().map(move |row| row[index].as_deref())
    }
}

/// Read a headerless, tab-separated partition file.
///
/// Rows whose width differs from `width` are rejected with the offending line.
pub fn read_partition(
    path: &Path,
    width: usize,
    quote: u8,
) -> ConversionResult<Vec<Vec<Option<String>>>> {
    let file = File::open(path).map_err(|e| ConversionError::io(e, path))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .quote(quote)
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            let line = e.position().map(|p| p.line());
            ConversionError::parse(e.to_string(), Some(path.to_path_buf()), line)
        })?;

        if record.len() != width {
            return Err(ConversionError::parse(
                format!("expected {} fields, found {}", width, record.len()),
                Some(path.to_path_buf()),
                record.position().map(|p| p.line()),
            ));
        }

        rows.push(
            record
                .iter()
                .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                .collect(),
        );
    }

    Ok(rows)
}
