//! Unit tests for export directory discovery

use std::fs;
use std::path::Path;
use tempfile::tempdir;

use neptuneconv::parser::directory::find_file_groups;

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), "").unwrap();
}

fn file_names(paths: &[std::path::PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_groups_are_ordered_by_base_name() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Protein-header.csv");
    touch(dir.path(), "Gene-header.csv");
    touch(dir.path(), "Disease-header.csv");

    let groups = find_file_groups(dir.path()).unwrap();
    let names: Vec<&str> = groups.iter().map(|g| g.base_name.as_str()).collect();
    assert_eq!(names, vec!["Disease", "Gene", "Protein"]);
}

#[test]
fn test_partitions_are_sorted_lexicographically() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Gene-header.csv");
    touch(dir.path(), "Gene-part010.csv");
    touch(dir.path(), "Gene-part002.csv");
    touch(dir.path(), "Gene-part001.csv");

    let groups = find_file_groups(dir.path()).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(
        file_names(&groups[0].partitions),
        vec!["Gene-part001.csv", "Gene-part002.csv", "Gene-part010.csv"]
    );
}

#[test]
fn test_partitions_belong_to_their_own_group() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Gene-header.csv");
    touch(dir.path(), "Gene-part000.csv");
    touch(dir.path(), "GeneToDisease-header.csv");
    touch(dir.path(), "GeneToDisease-part000.csv");

    let groups = find_file_groups(dir.path()).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(file_names(&groups[0].partitions), vec!["Gene-part000.csv"]);
    assert_eq!(
        file_names(&groups[1].partitions),
        vec!["GeneToDisease-part000.csv"]
    );
}

#[test]
fn test_unrelated_files_and_subdirectories_are_ignored() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Gene-header.csv");
    touch(dir.path(), "Gene-part000.csv");
    touch(dir.path(), "Gene-part000.tsv");
    touch(dir.path(), "neo4j-admin-import-call.sh");
    fs::create_dir(dir.path().join("Drug-header.csv")).unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    touch(&dir.path().join("nested"), "Disease-header.csv");

    let groups = find_file_groups(dir.path()).unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].base_name, "Gene");
    assert_eq!(file_names(&groups[0].partitions), vec!["Gene-part000.csv"]);
}

#[test]
fn test_header_without_partitions_is_still_a_group() {
    let dir = tempdir().unwrap();
    touch(dir.path(), "Orphan-header.csv");

    let groups = find_file_groups(dir.path()).unwrap();
    assert_eq!(groups.len(), 1);
    assert!(!groups[0].has_partitions());
    assert_eq!(groups[0].batch_count(10), 0);
}

#[test]
fn test_missing_directory_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(find_file_groups(&dir.path().join("absent")).is_err());
}
