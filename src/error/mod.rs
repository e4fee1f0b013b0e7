//! Error types and handling infrastructure for Neo4j to Neptune conversion

use anyhow::Error;
use std::fmt;
use std::path::PathBuf;

/// Core error types for the conversion process
#[derive(Debug, thiserror::Error)]
pub enum ConversionErrorKind {
    #[error("Unrecognized header format: expected vertex or edge headers, found [{}]", columns.join(", "))]
    UnrecognizedHeader { columns: Vec<String> },

    #[error("Header file is empty: {}", path.display())]
    EmptyHeader { path: PathBuf },

    #[error("No part files found for {base_name}")]
    MissingPartitions { base_name: String },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("Cannot create output directory {}: {message}", path.display())]
    OutputDirectory { path: PathBuf, message: String },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("Schema error: {message}")]
    Schema {
        message: String,
        path: Option<PathBuf>,
    },
}

impl ConversionErrorKind {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    pub fn unrecognized_header(columns: &[String]) -> Self {
        Self::UnrecognizedHeader {
            columns: columns.to_vec(),
        }
    }
}

/// Main error type for conversion operations
#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error("{kind}")]
    Conversion {
        kind: ConversionErrorKind,
        source: Option<anyhow::Error>,
    },

    #[error(transparent)]
    Other(#[from] Error),
}

impl ConversionError {
    pub fn parse(message: String, path: Option<PathBuf>, line: Option<u64>) -> Self {
        let mut error = ParseError::new(message);
        if let Some(path) = path {
            error = error.with_path(path);
        }
        if let Some(line) = line {
            error = error.with_line(line);
        }
        Self::ParseError(error)
    }

    pub fn conversion(kind: ConversionErrorKind) -> Self {
        Self::Conversion { kind, source: None }
    }

    pub fn conversion_with_source(kind: ConversionErrorKind, source: anyhow::Error) -> Self {
        Self::Conversion {
            kind,
            source: Some(source),
        }
    }

    pub fn io(error: std::io::Error, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::conversion_with_source(
            ConversionErrorKind::io(format!("{} ({})", error, path.display()), Some(path)),
            error.into(),
        )
    }

    /// Path of the file involved in the failure, when known
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::ParseError(err) => err.path.as_ref(),
            Self::Conversion { kind, .. } => match kind {
                ConversionErrorKind::Io { path, .. } | ConversionErrorKind::Schema { path, .. } => {
                    path.as_ref()
                }
                ConversionErrorKind::EmptyHeader { path }
                | ConversionErrorKind::OutputDirectory { path, .. } => Some(path),
                _ => None,
            },
            Self::Other(_) => None,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::ParseError(err) => format!("Input parse error: {}", err),
            Self::Conversion { kind, .. } => match kind {
                ConversionErrorKind::UnrecognizedHeader { columns } => format!(
                    "Header has neither :ID/:LABEL nor :START_ID/:END_ID/:TYPE columns (found {})",
                    columns.join(", ")
                ),
                ConversionErrorKind::MissingPartitions { base_name } => {
                    format!("No part files found for {}, skipping", base_name)
                }
                _ => self.to_string(),
            },
            Self::Other(err) => {
                format!("Unexpected error: {}", err)
            }
        }
    }
}

/// Errors raised while reading header and partition files
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub path: Option<PathBuf>,
    pub line: Option<u64>,
}

impl ParseError {
    pub fn new(message: String) -> Self {
        Self {
            message,
            path: None,
            line: None,
        }
    }

    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    pub fn with_line(mut self, line: u64) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(path) = &self.path {
            write!(f, " in {}", path.display())?;
        }
        if let Some(line) = self.line {
            write!(f, " at line {}", line)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
