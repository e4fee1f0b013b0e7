use anyhow::{Context, Result};
use clap::Parser;

use neptuneconv::cli::{handle_error, Args, CliConfig, CliUtils};
use neptuneconv::{ConversionReport, Converter, SchemaDescription};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match CliConfig::from_args(args) {
        Ok(config) => config,
        Err(e) => {
            handle_error(&e);
            std::process::exit(2);
        }
    };

    // Set up logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.default_log_filter()),
    )
    .init();

    let report = match run_conversion(&config) {
        Ok(report) => report,
        Err(e) => {
            handle_error(&e);
            std::process::exit(1);
        }
    };

    CliUtils::show_report(&report, config.is_quiet());

    if let Some(report_path) = &config.args.report {
        write_report(&report, report_path)?;
        CliUtils::show_success(
            &format!("Report written to {}", report_path.display()),
            config.is_quiet(),
        );
    }

    if config.args.strict && !report.is_complete() {
        anyhow::bail!(
            "{} of {} groups did not convert completely",
            report.failed_groups().len(),
            report.groups.len()
        );
    }

    Ok(())
}

fn run_conversion(config: &CliConfig) -> neptuneconv::ConversionResult<ConversionReport> {
    let schema = SchemaDescription::load_or_default(&config.schema_path());
    let converter = Converter::new(config.converter_config.clone(), schema);

    let input = &config.args.input;
    let total = converter.discover(input)?.len();
    let pb = CliUtils::create_progress_bar(
        total as u64,
        config.is_quiet() || config.is_verbose(),
    );

    let report = converter.run_with_observer(input, &config.args.output, |group| {
        pb.set_message(group.base_name.clone());
        pb.inc(1);
    });
    pb.finish_and_clear();

    report
}

fn write_report(report: &ConversionReport, path: &std::path::Path) -> Result<()> {
    let json = report.to_json().context("Failed to serialize run report")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write report to {}", path.display()))
}
