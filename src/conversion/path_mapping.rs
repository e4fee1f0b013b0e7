use std::path::{Path, PathBuf};

use crate::parser::ElementKind;

/// Output file name for one batch of a group.
///
/// A group converted in a single batch keeps the plain Neptune name
/// (`node_<base>.csv` / `edges_<base>.csv`); otherwise each batch gets a
/// 1-based, zero-padded suffix so batches never overwrite each other.
pub fn batch_file_name(kind: ElementKind, base_name: &str, index: usize, batch_count: usize) -> String {
    if batch_count <= 1 {
        format!("{}_{}.csv", kind.file_prefix(), base_name)
    } else {
        format!("{}_{}_{:03}.csv", kind.file_prefix(), base_name, index + 1)
    }
}

/// Map a batch of a group into its path under `output_dir`.
pub fn map_batch_to_output(
    output_dir: &Path,
    kind: ElementKind,
    base_name: &str,
    index: usize,
    batch_count: usize,
) -> PathBuf {
    output_dir.join(batch_file_name(kind, base_name, index, batch_count))
}
