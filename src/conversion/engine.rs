//! Core conversion engine for Neo4j to Neptune transformation

use rayon::prelude::*;
use std::path::{Path, PathBuf};

use crate::conversion::batch::{convert_batch, GroupContext};
use crate::conversion::config::ConverterConfig;
use crate::conversion::stats::{ConversionReport, GroupReport, GroupStatus};
use crate::conversion::ConversionResult;
use crate::error::{ConversionError, ConversionErrorKind};
use crate::formatter::EdgeIdSequence;
use crate::parser::directory::find_file_groups;
use crate::parser::{FileGroup, Kind};
use crate::schema::SchemaDescription;

/// Main conversion engine
pub struct Converter {
    config: ConverterConfig,
    schema: SchemaDescription,
}

impl Converter {
    /// Create a new conversion engine
    pub fn new(config: ConverterConfig, schema: SchemaDescription) -> Self {
        Self { config, schema }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn schema(&self) -> &SchemaDescription {
        &self.schema
    }

    /// Convert every file group of `input_dir` into `output_dir`
    pub fn run(&self, input_dir: &Path, output_dir: &Path) -> ConversionResult<ConversionReport> {
        self.run_with_observer(input_dir, output_dir, |_| {})
    }

    /// Like [`Converter::run`], calling `observer` as each group finishes.
    ///
    /// Only configuration errors, an unreadable input directory and an
    /// output directory that cannot be created fail the run. Everything else
    /// is recorded per group in the returned report.
    pub fn run_with_observer<F>(
        &self,
        input_dir: &Path,
        output_dir: &Path,
        observer: F,
    ) -> ConversionResult<ConversionReport>
    where
        F: Fn(&GroupReport) + Sync,
    {
        self.config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

        std::fs::create_dir_all(output_dir).map_err(|e| {
            log::error!(
                "Failed to create output directory {}: {}",
                output_dir.display(),
                e
            );
            ConversionError::conversion_with_source(
                ConversionErrorKind::OutputDirectory {
                    path: output_dir.to_path_buf(),
                    message: e.to_string(),
                },
                e.into(),
            )
        })?;

        let mut report = ConversionReport::new(
            input_dir.to_path_buf(),
            output_dir.to_path_buf(),
            self.config.batch_size,
        );

        let groups = self.discover(input_dir)?;
        log::info!(
            "Found {} file groups in {}",
            groups.len(),
            input_dir.display()
        );

        let convert = |group: &FileGroup| {
            let group_report = self.convert_group(group, output_dir);
            observer(&group_report);
            group_report
        };

        let group_reports: Vec<GroupReport> = if self.config.parallel {
            groups.par_iter().map(convert).collect()
        } else {
            groups.iter().map(convert).collect()
        };

        report.finish(group_reports);
        log::info!("{}", report.summary());
        Ok(report)
    }

    /// Find the file groups of an export directory
    pub fn discover(&self, input_dir: &Path) -> ConversionResult<Vec<FileGroup>> {
        find_file_groups(input_dir).map_err(|e| {
            let path = e.path().map(Path::to_path_buf).or_else(|| Some(input_dir.to_path_buf()));
            ConversionError::conversion_with_source(
                ConversionErrorKind::io(format!("Failed listing input files: {}", e), path),
                e.into(),
            )
        })
    }

    /// Convert one file group, never failing: problems end up in the report
    pub fn convert_group(&self, group: &FileGroup, output_dir: &Path) -> GroupReport {
        if !group.has_partitions() {
            let error = ConversionError::conversion(ConversionErrorKind::MissingPartitions {
                base_name: group.base_name.clone(),
            });
            log::warn!("{}", error.user_message());
            return GroupReport::skipped(&group.base_name, error.user_message());
        }

        let mut report = GroupReport::new(&group.base_name);
        if let Err(e) = self.try_convert_group(group, output_dir, &mut report) {
            log::error!("Error processing {}: {}", group.base_name, e.user_message());
            report.status = GroupStatus::Failed {
                reason: e.user_message(),
            };
        }
        report.settle();
        report
    }

    fn try_convert_group(
        &self,
        group: &FileGroup,
        output_dir: &Path,
        report: &mut GroupReport,
    ) -> ConversionResult<()> {
        let header = group.read_header()?;
        let kind = Kind::detect(&header)?;
        report.kind = Some(kind.element());

        let vertex_label = match kind {
            Kind::Vertex { .. } => Some(self.schema.resolve(&group.base_name)),
            Kind::Edge { .. } => None,
        };
        report.label = vertex_label.clone();

        let batch_count = group.batch_count(self.config.batch_size);
        log::info!(
            "Processing {} ({}) in batches of {}...",
            group.base_name,
            kind.element(),
            self.config.batch_size
        );

        let ctx = GroupContext {
            base_name: &group.base_name,
            header: &header,
            kind,
            vertex_label: vertex_label.as_deref(),
            output_dir,
            batch_count,
        };

        let mut edge_ids = EdgeIdSequence::new(&group.base_name);
        for (index, partitions) in group.batches(self.config.batch_size).enumerate() {
            let batch = convert_batch(&ctx, index, partitions, &self.config, &mut edge_ids)?;
            report.batches.push(batch);
        }

        Ok(())
    }
}

/// Convert an export directory with the given batch size and schema description
pub fn convert_directory(
    input_dir: &Path,
    output_dir: &Path,
    batch_size: usize,
    schema: &SchemaDescription,
) -> ConversionResult<ConversionReport> {
    let config = ConverterConfig::default().with_batch_size(batch_size);
    Converter::new(config, schema.clone()).run(input_dir, output_dir)
}

/// Convert an export directory and return the output directory.
///
/// The returned path does not mean every group converted; use
/// [`convert_directory`] to inspect the per-group outcome.
pub fn convert_to_neptune(
    input_dir: &Path,
    output_dir: &Path,
    batch_size: usize,
    schema: &SchemaDescription,
) -> ConversionResult<PathBuf> {
    let report = convert_directory(input_dir, output_dir, batch_size, schema)?;
    Ok(report.output_dir)
}
