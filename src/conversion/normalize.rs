//! Row normalization for concatenated batches
//!
//! Cleans export artifacts from every cell and collapses multi-valued
//! label/type cells into the single form Neptune accepts.

use crate::parser::{Batch, Kind};

/// Characters stripped from both ends of every cell
const CELL_NOISE: &[char] = &[' ', '\t', '\r', '\n', '\'', '"'];

/// Separator used by the export between multiple labels or types
pub const EXPORT_LABEL_SEPARATOR: char = '|';

/// Separator Neptune expects between multiple vertex labels
pub const NEPTUNE_LABEL_SEPARATOR: char = ';';

/// Cell values the upstream tooling writes for a missing value
pub const NULL_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Labels parsed from a multi-valued cell, segments kept in order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LabelSet(Vec<String>);

impl LabelSet {
    /// Split a pipe-delimited cell, trimming each segment
    pub fn parse(cell: &str) -> Self {
        Self(
            cell.split(EXPORT_LABEL_SEPARATOR)
                .map(str::trim)
                .map(str::to_string)
                .collect(),
        )
    }

    /// Non-empty labels in order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str).filter(|s| !s.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.labels().next().is_none()
    }

    /// Non-empty labels joined the way Neptune encodes a multi-label vertex
    pub fn to_vertex_label(&self) -> String {
        let separator = NEPTUNE_LABEL_SEPARATOR.to_string();
        self.labels().collect::<Vec<_>>().join(separator.as_str())
    }

    /// The first segment, unless it is empty
    pub fn primary(&self) -> Option<&str> {
        self.0.first().map(String::as_str).filter(|s| !s.is_empty())
    }
}

/// Strip whitespace and stray quotes from a cell.
///
/// Blank cells and [`NULL_MARKERS`] become `None`.
pub fn clean_cell(cell: &str) -> Option<String> {
    let cleaned = cell.trim_matches(CELL_NOISE);
    if cleaned.is_empty() || NULL_MARKERS.contains(&cleaned) {
        return None;
    }
    Some(cleaned.to_string())
}

/// Collapse a label/type cell for the given kind.
///
/// Vertex labels keep every non-empty label, separated by `;`. Edges keep
/// only the first segment: Neptune allows a single label per edge, so `X|Y`
/// becomes `X` and `|Y` becomes null.
pub fn collapse_label(cell: &str, kind: &Kind) -> Option<String> {
    let labels = LabelSet::parse(cell);
    match kind {
        Kind::Vertex { .. } => (!labels.is_empty()).then(|| labels.to_vertex_label()),
        Kind::Edge { .. } => labels.primary().map(str::to_string),
    }
}

/// Clean every cell of a batch and collapse its label/type column.
///
/// Edge batches lose all but the first type of multi-typed rows; see
/// [`collapse_label`].
pub fn normalize_batch(mut batch: Batch, kind: &Kind) -> Batch {
    let label_column = kind.label_column();
    for row in &mut batch.rows {
        for (index, cell) in row.iter_mut().enumerate() {
            let cleaned = cell.as_deref().and_then(clean_cell);
            *cell = if index == label_column {
                cleaned.and_then(|value| collapse_label(&value, kind))
            } else {
                cleaned
            };
        }
    }
    batch
}
