//! Writing translated batches as Neptune bulk-load CSV files

use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{ConversionError, ConversionResult};
use crate::formatter::header::{ColumnRole, TranslatedHeader};
use crate::parser::Batch;

/// Monotonic edge id source, one per file group
#[derive(Debug, Clone)]
pub struct EdgeIdSequence {
    prefix: String,
    next: u64,
}

impl EdgeIdSequence {
    pub fn new(base_name: &str) -> Self {
        Self {
            prefix: base_name.to_string(),
            next: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        let id = format!("{}_{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Write one batch to `path` and return the number of data rows written.
///
/// Vertex `~label` cells are replaced by `vertex_label` when given. Identity
/// and endpoint cells are copied verbatim as text, null cells are written as
/// empty fields.
pub fn write_batch(
    path: &Path,
    header: &TranslatedHeader,
    batch: &Batch,
    vertex_label: Option<&str>,
    edge_ids: &mut EdgeIdSequence,
) -> ConversionResult<usize> {
    let file = File::create(path).map_err(|e| ConversionError::io(e, path))?;
    let mut writer = WriterBuilder::new()
        .delimiter(b',')
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(BufWriter::new(file));

    let to_io = |e: csv::Error| -> ConversionError {
        let io: std::io::Error = e.into();
        ConversionError::io(io, path)
    };

    writer.write_record(header.names()).map_err(to_io)?;

    let mut record: Vec<String> = Vec::with_capacity(header.columns.len());
    for row in &batch.rows {
        record.clear();
        for column in &header.columns {
            let value = match (column.role, column.source, vertex_label) {
                (ColumnRole::Label, _, Some(label)) => label.to_string(),
                (_, Some(index), _) => row[index].clone().unwrap_or_default(),
                (_, None, _) => edge_ids.next_id(),
            };
            record.push(value);
        }
        writer.write_record(&record).map_err(to_io)?;
    }

    writer.flush().map_err(|e| ConversionError::io(e, path))?;
    Ok(batch.rows.len())
}
