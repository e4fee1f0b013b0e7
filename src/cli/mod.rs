//! Command-line interface module

use clap::Parser;
use console::style;
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::{ConversionReport, ConverterConfig, GroupReport, GroupStatus, DEFAULT_BATCH_SIZE};
use crate::error::{ConversionError, ConversionErrorKind, ConversionResult};

/// Schema description looked up next to the input directory when `--schema` is not given
pub const DEFAULT_SCHEMA_FILE: &str = "schema_config.yaml";

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "neptuneconv")]
#[command(about = "Convert Neo4j-style graph CSV exports to the Amazon Neptune bulk-load format")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Directory holding `<name>-header.csv` and `<name>-part*.csv` files
    #[arg()]
    pub input: PathBuf,

    /// Output directory for the Neptune CSV files
    #[arg(short, long)]
    pub output: PathBuf,

    /// Number of partition files combined into one output file
    #[arg(short, long, default_value_t = DEFAULT_BATCH_SIZE)]
    pub batch_size: usize,

    /// Schema description (YAML) used to resolve vertex labels
    /// (default: schema_config.yaml next to the input directory)
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Convert file groups in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Generate ~id values for edges that have no id column
    #[arg(long)]
    pub edge_ids: bool,

    /// Quote character used in the partition files
    #[arg(long, default_value_t = '\'')]
    pub quote: char,

    /// Write the run report as JSON to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Exit with an error if any group was skipped or failed
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub converter_config: ConverterConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let converter_config = Self::create_converter_config(&args)?;

        Ok(Self {
            args,
            converter_config,
        })
    }

    /// Create converter configuration from CLI arguments
    fn create_converter_config(args: &Args) -> ConversionResult<ConverterConfig> {
        if !args.quote.is_ascii() {
            return Err(ConversionError::conversion(ConversionErrorKind::configuration(
                format!("Quote character must be ASCII, got '{}'", args.quote),
            )));
        }

        let config = ConverterConfig::default()
            .with_batch_size(args.batch_size)
            .with_input_quote(args.quote as u8)
            .with_parallel(args.parallel)
            .with_generated_edge_ids(args.edge_ids);

        // Validate configuration
        config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

        Ok(config)
    }

    /// Schema description to load: `--schema`, or the default file beside the input directory
    pub fn schema_path(&self) -> PathBuf {
        match &self.args.schema {
            Some(path) => path.clone(),
            None => self
                .args
                .input
                .parent()
                .map(|parent| parent.join(DEFAULT_SCHEMA_FILE))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_FILE)),
        }
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.args.verbose {
            "debug"
        } else if self.args.quiet {
            "error"
        } else {
            "warn"
        }
    }
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Create a progress bar for group processing
    pub fn create_progress_bar(total: u64, hidden: bool) -> indicatif::ProgressBar {
        if hidden {
            return indicatif::ProgressBar::hidden();
        }
        let pb = indicatif::ProgressBar::new(total);
        if let Ok(progress_style) = indicatif::ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(progress_style.progress_chars("#>-"));
        }
        pb
    }

    /// Show a success message (if not in quiet mode)
    pub fn show_success(message: &str, quiet: bool) {
        if !quiet {
            println!("{} {}", style("✓").green(), message);
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", style("⚠").yellow(), message);
        }
    }

    /// One line describing a group outcome
    pub fn describe_group(group: &GroupReport) -> String {
        let kind = group
            .kind
            .map(|k| format!(" ({})", k))
            .unwrap_or_default();
        match &group.status {
            GroupStatus::Converted | GroupStatus::Partial => {
                let files = group.files_written().count();
                let failed = group.batches.len() - files;
                let mut line = format!(
                    "{}{} -> {} file(s), {} rows",
                    group.base_name,
                    kind,
                    files,
                    group.rows_written()
                );
                if failed > 0 {
                    line.push_str(&format!(", {} batch(es) not written", failed));
                }
                line
            }
            GroupStatus::Skipped { reason } | GroupStatus::Failed { reason } => {
                format!("{}{}: {}", group.base_name, kind, reason)
            }
        }
    }

    /// Print every group outcome followed by the run summary
    pub fn show_report(report: &ConversionReport, quiet: bool) {
        for group in &report.groups {
            let line = Self::describe_group(group);
            match group.status {
                GroupStatus::Converted => Self::show_success(&line, quiet),
                GroupStatus::Skipped { .. } => Self::show_warning(&line, quiet),
                GroupStatus::Partial | GroupStatus::Failed { .. } => Self::show_error(&line),
            }
        }
        if !quiet {
            println!(
                "\n{} (took {})",
                report.summary(),
                Self::format_duration(report.elapsed())
            );
        }
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    let message = error.user_message();
    CliUtils::show_error(&message);

    // Provide helpful suggestions
    if let ConversionError::Conversion { kind, .. } = error {
        match kind {
            ConversionErrorKind::OutputDirectory { .. } => {
                eprintln!("\nTip: Check that the --output location is writable");
            }
            ConversionErrorKind::Configuration { .. } => {
                eprintln!("\nTip: --batch-size must be at least 1");
            }
            _ => {}
        }
    }

    // Show usage hint
    eprintln!("\nTry 'neptuneconv --help' for usage information.");
}
