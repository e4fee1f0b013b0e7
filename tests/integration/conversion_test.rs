//! Integration tests for whole-directory conversion
//!
//! Builds small exports in temporary directories and checks the Neptune files
//! written for them.

use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

use neptuneconv::{convert_directory, Converter, ConverterConfig, GroupStatus, SchemaDescription};

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn gene_rows(start: usize) -> String {
    (start..start + 5)
        .map(|i| format!("g{i}\tGene\tg{i}\tGENE{i}\t{}\n", 1000 + i))
        .collect()
}

/// Two partitions of five genes each
fn gene_export(dir: &Path) {
    write(dir, "Gene-header.csv", "ID\tLABEL\tid\tname\tentrez_id\n");
    write(dir, "Gene-part000.csv", &gene_rows(0));
    write(dir, "Gene-part001.csv", &gene_rows(5));
}

#[test]
fn test_gene_export_end_to_end() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    gene_export(input.path());

    let report = convert_directory(input.path(), output.path(), 10, &SchemaDescription::empty())
        .unwrap();

    assert!(report.is_complete());
    assert_eq!(report.rows_written(), 10);
    assert_eq!(report.files_written().len(), 1);

    let content = fs::read_to_string(output.path().join("node_Gene.csv")).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "~id,~label,name:String,entrez_id:Int");
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[1], "g0,Gene,GENE0,1000");
    assert_eq!(lines[10], "g9,Gene,GENE9,1009");
}

#[test]
fn test_non_numeric_entrez_ids_stay_strings() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(input.path(), "Gene-header.csv", "ID\tLABEL\tid\tname\tentrez_id\n");
    write(input.path(), "Gene-part000.csv", "g1\tGene\tg1\tTP53\tNCBI:7157\n");

    convert_directory(input.path(), output.path(), 10, &SchemaDescription::empty()).unwrap();

    let content = fs::read_to_string(output.path().join("node_Gene.csv")).unwrap();
    assert_eq!(
        content,
        "~id,~label,name:String,entrez_id:String\ng1,Gene,TP53,NCBI:7157\n"
    );
}

#[test]
fn test_runs_are_byte_identical() {
    let input = tempdir().unwrap();
    gene_export(input.path());
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();

    convert_directory(input.path(), first.path(), 1, &SchemaDescription::empty()).unwrap();
    convert_directory(input.path(), second.path(), 1, &SchemaDescription::empty()).unwrap();

    for name in ["node_Gene_001.csv", "node_Gene_002.csv"] {
        assert_eq!(
            fs::read(first.path().join(name)).unwrap(),
            fs::read(second.path().join(name)).unwrap(),
            "{name} differs between runs"
        );
    }
}

#[test]
fn test_batches_are_numbered_in_partition_order() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(input.path(), "Gene-header.csv", ":ID\t:LABEL\tname\n");
    for i in 0..5 {
        write(
            input.path(),
            &format!("Gene-part{:03}.csv", i),
            &format!("g{i}\tGene\tGENE{i}\n"),
        );
    }

    let report = convert_directory(input.path(), output.path(), 2, &SchemaDescription::empty())
        .unwrap();

    let group = report.group("Gene").unwrap();
    assert_eq!(group.batches.len(), 3);
    assert_eq!(
        group.batches.iter().map(|b| b.partitions).collect::<Vec<_>>(),
        vec![2, 2, 1]
    );
    assert_eq!(
        fs::read_to_string(output.path().join("node_Gene_003.csv")).unwrap(),
        "~id,~label,name:String\ng4,Gene,GENE4\n"
    );
    assert!(!output.path().join("node_Gene.csv").exists());
}

#[test]
fn test_schema_alias_resolves_vertex_label() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(input.path(), "Protein-header.csv", ":ID\t:LABEL\tid\tname\n");
    write(input.path(), "Protein-part000.csv", "P04637\tProtein|Polypeptide\tP04637\tp53\n");

    let schema = SchemaDescription::from_yaml(
        "protein:\n  represented_as: node\n  input_label: [Protein, uniprot_protein]\n",
    )
    .unwrap();
    let report = convert_directory(input.path(), output.path(), 10, &schema).unwrap();

    assert_eq!(report.group("Protein").unwrap().label.as_deref(), Some("protein"));
    assert_eq!(
        fs::read_to_string(output.path().join("node_Protein.csv")).unwrap(),
        "~id,~label,name:String\nP04637,protein,p53\n"
    );
}

#[test]
fn test_edges_keep_id_and_first_type() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(
        input.path(),
        "GeneToDisease-header.csv",
        ":START_ID\t:END_ID\t:TYPE\tid\tscore\tsource\n",
    );
    write(
        input.path(),
        "GeneToDisease-part000.csv",
        "g1\td1\tASSOCIATED_WITH|CAUSES\te1\t0.9\t'OMIM'\ng2\td1\tASSOCIATED_WITH\te2\t1\t\n",
    );

    convert_directory(input.path(), output.path(), 10, &SchemaDescription::empty()).unwrap();

    assert_eq!(
        fs::read_to_string(output.path().join("edges_GeneToDisease.csv")).unwrap(),
        "~from,~to,~label,~id,score:Double,source:String\n\
         g1,d1,ASSOCIATED_WITH,e1,0.9,OMIM\n\
         g2,d1,ASSOCIATED_WITH,e2,1,\n"
    );
}

#[test]
fn test_parallel_run_matches_sequential() {
    let input = tempdir().unwrap();
    gene_export(input.path());
    write(input.path(), "Drug-header.csv", ":ID\t:LABEL\tapproved\n");
    write(input.path(), "Drug-part000.csv", "d1\tDrug\ttrue\nd2\tDrug\tFALSE\n");
    write(input.path(), "Treats-header.csv", ":START_ID\t:END_ID\t:TYPE\n");
    write(input.path(), "Treats-part000.csv", "d1\tg1\tTREATS\n");

    let sequential = tempdir().unwrap();
    let parallel = tempdir().unwrap();

    let seq_report = Converter::new(ConverterConfig::default(), SchemaDescription::empty())
        .run(input.path(), sequential.path())
        .unwrap();
    let par_report = Converter::new(
        ConverterConfig::default().with_parallel(true),
        SchemaDescription::empty(),
    )
    .run(input.path(), parallel.path())
    .unwrap();

    let names = |report: &neptuneconv::ConversionReport| {
        report
            .groups
            .iter()
            .map(|g| g.base_name.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(names(&seq_report), vec!["Drug", "Gene", "Treats"]);
    assert_eq!(names(&par_report), names(&seq_report));

    for name in ["node_Drug.csv", "node_Gene.csv", "edges_Treats.csv"] {
        assert_eq!(
            fs::read_to_string(sequential.path().join(name)).unwrap(),
            fs::read_to_string(parallel.path().join(name)).unwrap()
        );
    }
    assert!(par_report
        .groups
        .iter()
        .all(|g| g.status == GroupStatus::Converted));
}

#[test]
fn test_missing_value_markers_are_written_empty() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(input.path(), "N-header.csv", ":ID\t:LABEL\tscore\n");
    write(input.path(), "N-part000.csv", "n1\tX\t1\nn2\tX\tNA\nn3\t''\tnull\n");

    convert_directory(input.path(), output.path(), 10, &SchemaDescription::empty()).unwrap();

    assert_eq!(
        fs::read_to_string(output.path().join("node_N.csv")).unwrap(),
        "~id,~label,score:Int\nn1,N,1\nn2,N,\nn3,N,\n"
    );
}

#[test]
fn test_blank_edge_types_are_written_empty() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    write(input.path(), "Links-header.csv", ":START_ID\t:END_ID\t:TYPE\n");
    write(input.path(), "Links-part000.csv", "a\tb\t|Y\nc\td\t\ne\tf\tX|Y\n");

    convert_directory(input.path(), output.path(), 10, &SchemaDescription::empty()).unwrap();

    assert_eq!(
        fs::read_to_string(output.path().join("edges_Links.csv")).unwrap(),
        "~from,~to,~label\na,b,\nc,d,\ne,f,X\n"
    );
}
