use std::path::Path;

/// Suffix of the single-line header file written for each entity type
pub const HEADER_SUFFIX: &str = "-header.csv";

/// Marker between the base name and the partition number of a data file
pub const PART_MARKER: &str = "-part";

/// Return the group base name if the file name is `<base>-header.csv`.
///
/// Only the name is inspected; callers pass regular files.
pub fn header_base_name(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    name.strip_suffix(HEADER_SUFFIX)
        .filter(|base| !base.is_empty())
        .map(str::to_string)
}

/// Return true if the file name matches `<base>-part*.csv`
pub fn is_part_file_of(path: &Path, base_name: &str) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.strip_prefix(base_name)
        .and_then(|rest| rest.strip_prefix(PART_MARKER))
        .is_some_and(|rest| rest.ends_with(".csv"))
}
