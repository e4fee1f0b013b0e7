//! Schema description and vertex label resolution
//!
//! The schema description is the YAML schema configuration used by the
//! upstream graph builder: a mapping from canonical label to metadata, where
//! the metadata may declare an `input_label` (a string or a list of strings)
//! naming the entity as it appears in the export.

use serde_yaml::{Mapping, Value};
use std::path::Path;

use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};

/// One canonical label and the aliases it is known under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaEntry {
    pub label: String,
    pub input_labels: Vec<String>,
}

/// Canonical vertex labels, in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDescription {
    entries: Vec<SchemaEntry>,
}

impl SchemaDescription {
    pub fn new(entries: Vec<SchemaEntry>) -> Self {
        Self { entries }
    }

    /// An empty description; every lookup falls back to the category name
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SchemaEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a YAML schema description
    pub fn from_yaml(content: &str) -> ConversionResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::empty());
        }
        let root: Value = serde_yaml::from_str(content).map_err(|e| {
            ConversionError::conversion(ConversionErrorKind::Schema {
                message: e.to_string(),
                path: None,
            })
        })?;

        let mapping = match root {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            _ => {
                return Err(ConversionError::conversion(ConversionErrorKind::Schema {
                    message: "schema description must be a mapping".to_string(),
                    path: None,
                }))
            }
        };

        let entries = mapping
            .iter()
            .filter(|(_, meta)| meta.is_mapping())
            .filter_map(|(key, meta)| {
                let label = key.as_str()?.to_string();
                Some(SchemaEntry {
                    label,
                    input_labels: input_labels(meta),
                })
            })
            .collect();

        Ok(Self { entries })
    }

    /// Load a schema description file
    pub fn load(path: &Path) -> ConversionResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConversionError::io(e, path))?;
        Self::from_yaml(&content).map_err(|e| match e {
            ConversionError::Conversion {
                kind: ConversionErrorKind::Schema { message, .. },
                source,
            } => ConversionError::Conversion {
                kind: ConversionErrorKind::Schema {
                    message,
                    path: Some(path.to_path_buf()),
                },
                source,
            },
            other => other,
        })
    }

    /// Load a schema description, or fall back to an empty one.
    ///
    /// A missing or unreadable schema only lowers label fidelity, so it is
    /// logged rather than raised.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!(
                "No schema description at {}, using raw group names as labels",
                path.display()
            );
            return Self::empty();
        }
        match Self::load(path) {
            Ok(schema) => {
                log::debug!(
                    "Loaded {} schema entries from {}",
                    schema.entries.len(),
                    path.display()
                );
                schema
            }
            Err(e) => {
                log::warn!("Could not load schema file: {}", e.user_message());
                Self::empty()
            }
        }
    }

    /// Resolve the label emitted for a vertex group.
    ///
    /// Tries, in order: exact key, case-insensitive key, case-insensitive
    /// input label. Falls back to `category` unchanged.
    pub fn resolve(&self, category: &str) -> String {
        if let Some(entry) = self.entries.iter().find(|e| e.label == category) {
            return entry.label.clone();
        }

        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| e.label.eq_ignore_ascii_case(category))
        {
            return entry.label.clone();
        }

        if let Some(entry) = self.entries.iter().find(|e| {
            e.input_labels
                .iter()
                .any(|alias| alias.eq_ignore_ascii_case(category))
        }) {
            return entry.label.clone();
        }

        category.to_string()
    }
}

fn input_labels(meta: &Value) -> Vec<String> {
    match meta.get("input_label") {
        Some(Value::String(alias)) => vec![alias.clone()],
        Some(Value::Sequence(aliases)) => aliases
            .iter()
            .filter_map(|a| a.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}
