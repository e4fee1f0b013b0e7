//! Translation of export headers into Neptune headers

use crate::formatter::types::{infer_type, PropertyType};
use crate::parser::{Batch, Header, Kind, SystemColumn};

pub const NEPTUNE_ID: &str = "~id";
pub const NEPTUNE_LABEL: &str = "~label";
pub const NEPTUNE_FROM: &str = "~from";
pub const NEPTUNE_TO: &str = "~to";

/// What an output column carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnRole {
    Identity,
    From,
    To,
    Label,
    Property(PropertyType),
}

/// One column of a translated header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputColumn {
    pub name: String,
    pub role: ColumnRole,
    /// Header position the values come from; `None` for generated edge ids
    pub source: Option<usize>,
}

impl OutputColumn {
    fn system(name: &str, role: ColumnRole, source: usize) -> Self {
        Self {
            name: name.to_string(),
            role,
            source: Some(source),
        }
    }
}

/// Neptune header for one batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedHeader {
    pub columns: Vec<OutputColumn>,
}

impl TranslatedHeader {
    pub fn names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Source column name to output column name, for every copied column
    pub fn renames<'a>(&'a self, header: &'a Header) -> Vec<(&'a str, &'a str)> {
        self.columns
            .iter()
            .filter_map(|c| {
                c.source
                    .map(|i| (header.columns[i].as_str(), c.name.as_str()))
            })
            .collect()
    }
}

/// Property name without a Neo4j type annotation (`score:double` → `score`)
fn property_name(column: &str) -> &str {
    match column.split_once(':') {
        Some((name, _)) if !name.is_empty() => name,
        _ => column,
    }
}

/// Translate a header for one batch.
///
/// Vertex: `:ID` → `~id`, `:LABEL` → `~label`, an `id` column is dropped.
/// Edge: `:START_ID` → `~from`, `:END_ID` → `~to`, `:TYPE` → `~label`, an
/// `id` column becomes `~id`. When `generate_edge_ids` is set and an edge
/// header has no `id` column, a generated `~id` column is appended.
/// Every other column becomes `<name>:<Type>` with the type inferred from
/// the batch. Headers matching neither kind are rejected earlier by
/// [`Kind::detect`].
pub fn translate_header(
    header: &Header,
    batch: &Batch,
    kind: &Kind,
    generate_edge_ids: bool,
) -> TranslatedHeader {
    let mut columns = Vec::with_capacity(header.len() + 1);
    let mut has_edge_id = false;

    for (index, column) in header.columns.iter().enumerate() {
        match kind.system_role(index) {
            Some(SystemColumn::Id) => {
                columns.push(OutputColumn::system(NEPTUNE_ID, ColumnRole::Identity, index))
            }
            Some(SystemColumn::Label) | Some(SystemColumn::Type) => {
                columns.push(OutputColumn::system(NEPTUNE_LABEL, ColumnRole::Label, index))
            }
            Some(SystemColumn::StartId) => {
                columns.push(OutputColumn::system(NEPTUNE_FROM, ColumnRole::From, index))
            }
            Some(SystemColumn::EndId) => {
                columns.push(OutputColumn::system(NEPTUNE_TO, ColumnRole::To, index))
            }
            None if column.eq_ignore_ascii_case("id") => match kind {
                // redundant with ~id
                Kind::Vertex { .. } => continue,
                Kind::Edge { .. } => {
                    has_edge_id = true;
                    columns.push(OutputColumn::system(NEPTUNE_ID, ColumnRole::Identity, index));
                }
            },
            None => {
                let ty = infer_type(batch.column(index));
                columns.push(OutputColumn {
                    name: format!("{}:{}", property_name(column), ty),
                    role: ColumnRole::Property(ty),
                    source: Some(index),
                });
            }
        }
    }

    if generate_edge_ids && !has_edge_id && matches!(kind, Kind::Edge { .. }) {
        columns.push(OutputColumn {
            name: NEPTUNE_ID.to_string(),
            role: ColumnRole::Identity,
            source: None,
        });
    }

    TranslatedHeader { columns }
}
