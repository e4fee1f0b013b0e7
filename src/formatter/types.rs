//! Property type inference for Neptune typed columns
//!
//! Neptune's bulk loader expects every property header to carry a type
//! suffix (`name:Int`). The upstream export carries no usable type
//! information, so the type is inferred from the values of one batch.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?[0-9]+$").unwrap());
static DOUBLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[-+]?[0-9]+\.[0-9]*$").unwrap());
static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}(T[0-9]{2}:[0-9]{2}(:[0-9]{2}Z?)?)?$").unwrap()
});

/// Scalar type of a property column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Boolean,
    Integer,
    Double,
    Date,
    String,
}

impl PropertyType {
    /// Type name as written in a Neptune header
    pub fn neptune_name(&self) -> &'static str {
        match self {
            PropertyType::Boolean => "Bool",
            PropertyType::Integer => "Int",
            PropertyType::Double => "Double",
            PropertyType::Date => "Date",
            PropertyType::String => "String",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.neptune_name())
    }
}

/// Strip the whitespace and stray quotes the upstream export leaves around values
pub fn strip_value_noise(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\'' || c == '"')
}

fn is_bool(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
}

fn is_integer(value: &str) -> bool {
    INTEGER.is_match(value)
}

fn is_double(value: &str) -> bool {
    DOUBLE.is_match(value) || is_integer(value)
}

fn is_date(value: &str) -> bool {
    DATE.is_match(value)
}

/// Infer the type of a column.
///
/// Checks run in priority order and the first one every value satisfies wins:
/// Boolean, Integer, Double (integers widen to Double), Date, then String.
/// Null and blank values are ignored; a column with nothing left is String.
pub fn infer_type<'a, I>(values: I) -> PropertyType
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let present: Vec<&str> = values
        .into_iter()
        .flatten()
        .map(strip_value_noise)
        .filter(|v| !v.is_empty())
        .collect();

    if present.is_empty() {
        return PropertyType::String;
    }

    let checks: [(fn(&str) -> bool, PropertyType); 4] = [
        (is_bool, PropertyType::Boolean),
        (is_integer, PropertyType::Integer),
        (is_double, PropertyType::Double),
        (is_date, PropertyType::Date),
    ];

    checks
        .iter()
        .find(|(check, _)| present.iter().copied().all(check))
        .map(|(_, ty)| *ty)
        .unwrap_or(PropertyType::String)
}
