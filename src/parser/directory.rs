use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::parser::filter::{header_base_name, is_part_file_of};
use crate::parser::FileGroup;

/// List the regular files directly inside `dir`, sorted by file name.
fn list_files(dir: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Find the file groups in an export directory.
///
/// Every `<base>-header.csv` starts a group; its partitions are the
/// `<base>-part*.csv` files in lexicographic file-name order. Groups are
/// returned ordered by base name. A group may have no partitions; the caller
/// decides what to do with it.
pub fn find_file_groups(dir: &Path) -> Result<Vec<FileGroup>, walkdir::Error> {
    let files = list_files(dir)?;

    let mut headers: BTreeMap<String, PathBuf> = BTreeMap::new();
    for path in &files {
        if let Some(base) = header_base_name(path) {
            headers.insert(base, path.clone());
        }
    }

    let groups = headers
        .into_iter()
        .map(|(base_name, header_path)| {
            // `files` is already sorted by name
            let partitions = files
                .iter()
                .filter(|p| is_part_file_of(p, &base_name) && header_base_name(p).is_none())
                .cloned()
                .collect();
            FileGroup {
                base_name,
                header_path,
                partitions,
            }
        })
        .collect();

    Ok(groups)
}
