//! Integration tests for per-group and per-batch failure isolation

use assert_matches::assert_matches;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

use neptuneconv::{convert_directory, GroupStatus, SchemaDescription};

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn valid_groups(dir: &Path) {
    write(dir, "Disease-header.csv", ":ID\t:LABEL\tname\n");
    write(dir, "Disease-part000.csv", "d1\tDisease\tasthma\n");
    write(dir, "Gene-header.csv", ":ID\t:LABEL\tname\n");
    write(dir, "Gene-part000.csv", "g1\tGene\tBRCA1\n");
    write(dir, "Pathway-header.csv", ":ID\t:LABEL\tname\n");
    write(dir, "Pathway-part000.csv", "p1\tPathway\tapoptosis\n");
}

#[test]
fn test_unrecognized_header_only_fails_its_group() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    valid_groups(input.path());
    write(input.path(), "Broken-header.csv", "foo\tbar\n");
    write(input.path(), "Broken-part000.csv", "1\t2\n");

    let report = convert_directory(input.path(), output.path(), 10, &SchemaDescription::empty())
        .unwrap();

    assert!(!report.is_complete());
    assert_eq!(report.groups.len(), 4);
    assert_matches!(
        &report.group("Broken").unwrap().status,
        GroupStatus::Failed { reason } if reason.contains("foo")
    );
    for name in ["Disease", "Gene", "Pathway"] {
        assert_eq!(report.group(name).unwrap().status, GroupStatus::Converted);
        assert!(output.path().join(format!("node_{name}.csv")).exists());
    }
    assert!(!output.path().join("node_Broken.csv").exists());
    assert!(!output.path().join("edges_Broken.csv").exists());
}

#[test]
fn test_row_width_mismatch_fails_group() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    valid_groups(input.path());
    write(input.path(), "Drug-header.csv", ":ID\t:LABEL\tname\n");
    write(input.path(), "Drug-part000.csv", "x1\tDrug\taspirin\nx2\tDrug\n");

    let report = convert_directory(input.path(), output.path(), 10, &SchemaDescription::empty())
        .unwrap();

    assert_matches!(
        report.group("Drug").unwrap().status,
        GroupStatus::Failed { .. }
    );
    assert_eq!(report.failed_groups().len(), 1);
    assert_eq!(report.rows_written(), 3);
}

#[test]
fn test_write_failure_keeps_later_batches() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(input.path(), "Gene-header.csv", ":ID\t:LABEL\tname\n");
    for i in 0..3 {
        write(
            input.path(),
            &format!("Gene-part{:03}.csv", i),
            &format!("g{i}\tGene\tGENE{i}\n"),
        );
    }
    // A directory where the second batch file should go
    fs::create_dir(output.path().join("node_Gene_002.csv")).unwrap();

    let report = convert_directory(input.path(), output.path(), 1, &SchemaDescription::empty())
        .unwrap();

    let group = report.group("Gene").unwrap();
    assert_eq!(group.status, GroupStatus::Partial);
    assert_eq!(group.batches.len(), 3);
    assert!(group.batches[0].is_written());
    assert!(!group.batches[1].is_written());
    assert!(group.batches[2].is_written());
    assert_eq!(group.rows_written(), 2);

    assert_eq!(
        fs::read_to_string(output.path().join("node_Gene_003.csv")).unwrap(),
        "~id,~label,name:String\ng2,Gene,GENE2\n"
    );
    assert!(!report.is_complete());
}

#[test]
fn test_group_without_partitions_is_skipped() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    valid_groups(input.path());
    write(input.path(), "Orphan-header.csv", ":START_ID\t:END_ID\t:TYPE\n");

    let report = convert_directory(input.path(), output.path(), 10, &SchemaDescription::empty())
        .unwrap();

    assert_matches!(
        &report.group("Orphan").unwrap().status,
        GroupStatus::Skipped { reason } if reason.contains("Orphan")
    );
    assert_eq!(report.files_written().len(), 3);
}
