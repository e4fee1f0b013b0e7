//! Configuration options for Neo4j to Neptune conversion

use crate::parser::partition::DEFAULT_QUOTE;

/// Default number of partition files per output batch
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Conversion configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct ConverterConfig {
    /// Number of partition files concatenated into one output file
    pub batch_size: usize,
    /// Quote character of the tab-separated partition files
    pub input_quote: u8,
    /// Convert file groups concurrently
    pub parallel: bool,
    /// Give edges without an `id` column a generated `~id`
    pub generate_edge_ids: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            input_quote: DEFAULT_QUOTE,
            parallel: false,
            generate_edge_ids: false,
        }
    }
}

impl ConverterConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration for large exports: bigger batches, groups in parallel
    pub fn large_exports() -> Self {
        Self {
            batch_size: 50,
            parallel: true,
            ..Default::default()
        }
    }

    /// Set the number of partitions per batch
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Set the quote character of the partition files
    pub fn with_input_quote(mut self, quote: u8) -> Self {
        self.input_quote = quote;
        self
    }

    /// Enable/disable concurrent conversion of file groups
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Enable/disable generated edge ids
    pub fn with_generated_edge_ids(mut self, enabled: bool) -> Self {
        self.generate_edge_ids = enabled;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.batch_size == 0 {
            return Err("Batch size must be at least 1".to_string());
        }

        if matches!(self.input_quote, b'\t' | b'\n' | b'\r') {
            return Err("Input quote character cannot be a tab or line break".to_string());
        }

        Ok(())
    }
}
