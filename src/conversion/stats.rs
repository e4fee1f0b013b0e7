//! Run reports for conversion operations
//!
//! Group and batch failures do not abort a run. Instead each group gets a
//! [`GroupReport`] so callers can tell a complete run from a partial one
//! without reading logs.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::parser::ElementKind;

/// Outcome of one output batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Position of the batch within its group, from 0
    pub index: usize,
    pub output_file: PathBuf,
    /// Number of partition files concatenated into the batch
    pub partitions: usize,
    /// Data rows written (0 when the write failed)
    pub rows: usize,
    /// Write failure, if any
    pub error: Option<String>,
}

impl BatchReport {
    pub fn is_written(&self) -> bool {
        self.error.is_none()
    }
}

/// Overall state of one file group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    /// Every batch was written
    Converted,
    /// Some batches could not be written
    Partial,
    /// Nothing to convert (no partition files)
    Skipped { reason: String },
    /// The group was abandoned before or while converting
    Failed { reason: String },
}

/// Outcome of one file group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupReport {
    pub base_name: String,
    /// Known once the header was classified
    pub kind: Option<ElementKind>,
    /// Label written on every vertex row
    pub label: Option<String>,
    pub status: GroupStatus,
    pub batches: Vec<BatchReport>,
}

impl GroupReport {
    pub fn new(base_name: &str) -> Self {
        Self {
            base_name: base_name.to_string(),
            kind: None,
            label: None,
            status: GroupStatus::Converted,
            batches: Vec::new(),
        }
    }

    pub fn skipped(base_name: &str, reason: String) -> Self {
        Self {
            status: GroupStatus::Skipped { reason },
            ..Self::new(base_name)
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == GroupStatus::Converted
    }

    pub fn rows_written(&self) -> usize {
        self.batches.iter().map(|b| b.rows).sum()
    }

    pub fn files_written(&self) -> impl Iterator<Item = &PathBuf> {
        self.batches
            .iter()
            .filter(|b| b.is_written())
            .map(|b| &b.output_file)
    }

    /// Set the final status from the batch outcomes, unless the group already failed
    pub fn settle(&mut self) {
        if self.status == GroupStatus::Converted && self.batches.iter().any(|b| !b.is_written()) {
            self.status = GroupStatus::Partial;
        }
    }
}

/// Report of a whole conversion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub batch_size: usize,
    /// Groups in discovery order
    pub groups: Vec<GroupReport>,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub finished_at: chrono::DateTime<chrono::Utc>,
}

impl ConversionReport {
    pub fn new(input_dir: PathBuf, output_dir: PathBuf, batch_size: usize) -> Self {
        let now = chrono::Utc::now();
        Self {
            input_dir,
            output_dir,
            batch_size,
            groups: Vec::new(),
            started_at: now,
            finished_at: now,
        }
    }

    pub fn finish(&mut self, groups: Vec<GroupReport>) {
        self.groups = groups;
        self.finished_at = chrono::Utc::now();
    }

    /// True when every group was converted in full. Skipped groups count as incomplete.
    pub fn is_complete(&self) -> bool {
        self.groups.iter().all(GroupReport::is_success)
    }

    /// Groups that were skipped, failed, or only partly written
    pub fn failed_groups(&self) -> Vec<&GroupReport> {
        self.groups.iter().filter(|g| !g.is_success()).collect()
    }

    pub fn group(&self, base_name: &str) -> Option<&GroupReport> {
        self.groups.iter().find(|g| g.base_name == base_name)
    }

    pub fn files_written(&self) -> Vec<&PathBuf> {
        self.groups.iter().flat_map(|g| g.files_written()).collect()
    }

    pub fn rows_written(&self) -> usize {
        self.groups.iter().map(GroupReport::rows_written).sum()
    }

    pub fn elapsed(&self) -> std::time::Duration {
        (self.finished_at - self.started_at)
            .to_std()
            .unwrap_or_default()
    }

    /// Get a formatted summary
    pub fn summary(&self) -> String {
        format!(
            "Converted {}/{} groups into {} files ({} rows) in {:.1}s",
            self.groups.iter().filter(|g| g.is_success()).count(),
            self.groups.len(),
            self.files_written().len(),
            self.rows_written(),
            self.elapsed().as_secs_f32()
        )
    }

    /// Export to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Import from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
