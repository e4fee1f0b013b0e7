//! Unit tests for property type inference through the public API

use neptuneconv::formatter::infer_type;
use neptuneconv::PropertyType;

fn infer(values: &[&str]) -> PropertyType {
    infer_type(values.iter().map(|v| Some(*v)))
}

#[test]
fn test_priority_order() {
    assert_eq!(infer(&["true", "False"]), PropertyType::Boolean);
    assert_eq!(infer(&["1", "-2", "+3"]), PropertyType::Integer);
    assert_eq!(infer(&["1.5", "2"]), PropertyType::Double);
    assert_eq!(infer(&["2024-01-31", "1999-12-01"]), PropertyType::Date);
    assert_eq!(infer(&["BRCA1", "1"]), PropertyType::String);
}

#[test]
fn test_nulls_are_ignored() {
    let values = [None, Some("42"), None];
    assert_eq!(infer_type(values.iter().copied()), PropertyType::Integer);
}

#[test]
fn test_every_input_gets_a_type() {
    let samples: &[&[&str]] = &[
        &[],
        &[""],
        &["'quoted'"],
        &["1e10"],
        &["NaN"],
        &["2024-13-45"],
        &["\u{1F9EC}"],
        &["yes", "no"],
    ];
    for sample in samples {
        let ty = infer(sample);
        assert!(
            ["Bool", "Int", "Double", "Date", "String"].contains(&ty.neptune_name()),
            "{:?} inferred {:?}",
            sample,
            ty
        );
    }
    assert_eq!(infer(&[]), PropertyType::String);
    assert_eq!(infer(&["yes", "no"]), PropertyType::String);
}

#[test]
fn test_quoted_numbers_are_numbers() {
    assert_eq!(infer(&["'7'", "\"8\""]), PropertyType::Integer);
}
