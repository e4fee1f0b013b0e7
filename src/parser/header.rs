//! Header files and Vertex/Edge classification

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};

/// Header column with a reserved meaning in the export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemColumn {
    Id,
    Label,
    StartId,
    EndId,
    Type,
}

impl SystemColumn {
    /// Recognise `:ID`, `:LABEL`, `:START_ID`, `:END_ID` and `:TYPE`,
    /// with or without the leading colon.
    pub fn parse(column: &str) -> Option<Self> {
        match column.strip_prefix(':').unwrap_or(column) {
            "ID" => Some(Self::Id),
            "LABEL" => Some(Self::Label),
            "START_ID" => Some(Self::StartId),
            "END_ID" => Some(Self::EndId),
            "TYPE" => Some(Self::Type),
            _ => None,
        }
    }
}

/// Ordered column names of one file group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub columns: Vec<String>,
}

impl Header {
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(|c| c.into().trim().to_string()).collect(),
        }
    }

    /// Parse a tab-separated header line
    pub fn parse_line(line: &str) -> Self {
        let line = line.trim_start_matches('\u{feff}').trim_end_matches(['\r', '\n']);
        Self::new(line.split('\t'))
    }

    /// Read the first line of a header file
    pub fn read(path: &Path) -> ConversionResult<Self> {
        let file = File::open(path).map_err(|e| ConversionError::io(e, path))?;
        let mut line = String::new();
        BufReader::new(file)
            .read_line(&mut line)
            .map_err(|e| ConversionError::io(e, path))?;

        if line.trim().is_empty() {
            return Err(ConversionError::conversion(ConversionErrorKind::EmptyHeader {
                path: path.to_path_buf(),
            }));
        }
        Ok(Self::parse_line(&line))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Index of the first column carrying the given system meaning
    pub fn position_of(&self, system: SystemColumn) -> Option<usize> {
        self.columns
            .iter()
            .position(|c| SystemColumn::parse(c) == Some(system))
    }
}

/// Whether a file group holds nodes or relationships
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Vertex,
    Edge,
}

impl ElementKind {
    /// Output file prefix used by the Neptune layout
    pub fn file_prefix(&self) -> &'static str {
        match self {
            ElementKind::Vertex => "node",
            ElementKind::Edge => "edges",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Vertex => f.write_str("vertex"),
            ElementKind::Edge => f.write_str("edge"),
        }
    }
}

/// Vertex or Edge, with the header positions of its system columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Vertex {
        id: usize,
        label: usize,
    },
    Edge {
        start: usize,
        end: usize,
        edge_type: usize,
    },
}

impl Kind {
    /// Classify a header. Vertex wins when both column sets are present.
    pub fn detect(header: &Header) -> ConversionResult<Self> {
        use SystemColumn::*;

        if let (Some(id), Some(label)) = (header.position_of(Id), header.position_of(Label)) {
            return Ok(Kind::Vertex { id, label });
        }

        if let (Some(start), Some(end), Some(edge_type)) = (
            header.position_of(StartId),
            header.position_of(EndId),
            header.position_of(Type),
        ) {
            return Ok(Kind::Edge {
                start,
                end,
                edge_type,
            });
        }

        Err(ConversionError::conversion(
            ConversionErrorKind::unrecognized_header(&header.columns),
        ))
    }

    pub fn element(&self) -> ElementKind {
        match self {
            Kind::Vertex { .. } => ElementKind::Vertex,
            Kind::Edge { .. } => ElementKind::Edge,
        }
    }

    /// Header position of the label (vertex) or type (edge) column
    pub fn label_column(&self) -> usize {
        match *self {
            Kind::Vertex { label, .. } => label,
            Kind::Edge { edge_type, .. } => edge_type,
        }
    }

    /// Column role of a header position, if it is one of this kind's system columns
    pub fn system_role(&self, index: usize) -> Option<SystemColumn> {
        match *self {
            Kind::Vertex { id, label } => match index {
                i if i == id => Some(SystemColumn::Id),
                i if i == label => Some(SystemColumn::Label),
                _ => None,
            },
            Kind::Edge {
                start,
                end,
                edge_type,
            } => match index {
                i if i == start => Some(SystemColumn::StartId),
                i if i == end => Some(SystemColumn::EndId),
                i if i == edge_type => Some(SystemColumn::Type),
                _ => None,
            },
        }
    }
}
