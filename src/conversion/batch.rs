use std::path::{Path, PathBuf};

use crate::conversion::normalize::normalize_batch;
use crate::conversion::path_mapping::map_batch_to_output;
use crate::conversion::stats::BatchReport;
use crate::conversion::{ConversionResult, ConverterConfig};
use crate::formatter::{translate_header, write_batch, EdgeIdSequence};
use crate::parser::{Batch, Header, Kind};

/// Everything about a file group that stays fixed across its batches
#[derive(Debug, Clone)]
pub struct GroupContext<'a> {
    pub base_name: &'a str,
    pub header: &'a Header,
    pub kind: Kind,
    /// Resolved label for vertex groups
    pub vertex_label: Option<&'a str>,
    pub output_dir: &'a Path,
    pub batch_count: usize,
}

impl GroupContext<'_> {
    pub fn output_path(&self, index: usize) -> PathBuf {
        map_batch_to_output(
            self.output_dir,
            self.kind.element(),
            self.base_name,
            index,
            self.batch_count,
        )
    }
}

/// Convert one batch of partitions into one output file.
///
/// Read and parse errors are returned and abandon the group. Write errors
/// are logged and recorded in the returned report so later batches still run.
pub fn convert_batch(
    ctx: &GroupContext<'_>,
    index: usize,
    partitions: &[PathBuf],
    config: &ConverterConfig,
    edge_ids: &mut EdgeIdSequence,
) -> ConversionResult<BatchReport> {
    let batch = Batch::load(ctx.header, partitions, config.input_quote)?;
    let batch = normalize_batch(batch, &ctx.kind);
    let translated = translate_header(ctx.header, &batch, &ctx.kind, config.generate_edge_ids);

    let output_file = ctx.output_path(index);
    let mut report = BatchReport {
        index,
        output_file: output_file.clone(),
        partitions: partitions.len(),
        rows: 0,
        error: None,
    };

    match write_batch(&output_file, &translated, &batch, ctx.vertex_label, edge_ids) {
        Ok(rows) => {
            report.rows = rows;
            log::info!(
                "Wrote batch {}/{} ({} rows) → {}",
                index + 1,
                ctx.batch_count,
                rows,
                output_file.display()
            );
        }
        Err(e) => {
            log::error!("Failed to write {}: {}", output_file.display(), e.user_message());
            report.error = Some(e.user_message());
        }
    }

    Ok(report)
}
