use crate::changes::ChangedFiles;
use crate::report::Reporter;
use crate::types::models::{Column, CoverageSummary, Options, OutputFormat, Threshold};
use crate::utils::io::{load_options, save_summary};
use clap::{Args, Parser, Subcommand};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "cobertura-review",
    about = "Report Cobertura coverage of the files changed in a code review",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Warn about changed files with less total coverage than a threshold
    Warn {
        #[command(flatten)]
        args: ReportArgs,

        /// Minimum total coverage percentage, echoed as written
        #[arg(short, long)]
        threshold: String,
    },

    /// Show a markdown coverage table of changed files
    Table {
        #[command(flatten)]
        args: ReportArgs,

        /// Extra columns to include after the total
        #[arg(long, value_delimiter = ',')]
        columns: Vec<Column>,
    },

    /// Warn and show the table in one pass over the report
    Check {
        #[command(flatten)]
        args: ReportArgs,

        /// Minimum total coverage percentage, echoed as written
        #[arg(short, long)]
        threshold: Option<String>,

        /// Extra columns to include after the total
        #[arg(long, value_delimiter = ',')]
        columns: Vec<Column>,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Cobertura XML report
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// JSON options file (report, filename_prefix, columns); flags take precedence
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory prefix that changed paths carry but report paths do not
    #[arg(long)]
    pub filename_prefix: Option<String>,

    /// Modified file path (repeatable)
    #[arg(short, long = "modified", value_name = "PATH")]
    pub modified: Vec<String>,

    /// Added file path (repeatable)
    #[arg(short, long = "added", value_name = "PATH")]
    pub added: Vec<String>,

    /// Also treat files changed since this git revision as changed
    #[arg(long)]
    pub base: Option<String>,

    /// Output format
    #[arg(long, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Write the output here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Merge the config file (if any) with flags, flags winning
pub fn resolve_options(args: &ReportArgs, columns: &[Column]) -> Result<Options, crate::Error> {
    let mut options = match &args.config {
        Some(config_path) => load_options(config_path)?,
        None => Options::default(),
    };

    if args.report.is_some() {
        options.report = args.report.clone();
    }
    if args.filename_prefix.is_some() {
        options.filename_prefix = args.filename_prefix.clone();
    }
    if !columns.is_empty() {
        options.columns = columns.to_vec();
    }

    Ok(options)
}

/// Union of the listed files and, with `--base`, the files git reports as changed
pub fn resolve_changed_files(args: &ReportArgs) -> Result<HashSet<String>, crate::Error> {
    let mut changes = ChangedFiles::new(args.modified.clone(), args.added.clone());
    if let Some(base) = &args.base {
        changes.extend(ChangedFiles::from_git(Path::new("."), base)?);
    }
    if changes.is_empty() {
        log::info!("No changed files given, nothing will be reported");
    }
    Ok(changes.union())
}

pub fn execute_warn_command(
    args: &ReportArgs,
    threshold: &str,
) -> Result<CoverageSummary, Box<dyn std::error::Error>> {
    execute_check_command(args, Some(threshold), &[], false)
}

pub fn execute_table_command(
    args: &ReportArgs,
    columns: &[Column],
) -> Result<CoverageSummary, Box<dyn std::error::Error>> {
    execute_check_command(args, None, columns, true)
}

pub fn execute_check_command(
    args: &ReportArgs,
    threshold: Option<&str>,
    columns: &[Column],
    show_table: bool,
) -> Result<CoverageSummary, Box<dyn std::error::Error>> {
    let threshold = threshold.map(str::parse::<Threshold>).transpose()?;
    let options = resolve_options(args, columns)?;
    let changed_files = resolve_changed_files(args)?;

    let reporter = Reporter::new(options, changed_files);

    let mut summary = CoverageSummary::default();
    if let Some(threshold) = &threshold {
        summary.findings = reporter.warn_if_file_less_than(threshold)?;
    }
    if show_table {
        summary.table = reporter.show_coverage()?;
    }

    emit_summary(&summary, args.format, args.output.as_deref())?;

    Ok(summary)
}

fn emit_summary(
    summary: &CoverageSummary,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), crate::Error> {
    match (format, output) {
        (OutputFormat::Json, Some(output_path)) => {
            save_summary(summary, output_path)?;
            println!("Coverage summary saved to {}", output_path.display());
        }
        (OutputFormat::Json, None) => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
        (OutputFormat::Text, output) => {
            for finding in &summary.findings {
                eprintln!("warning: {}", finding.message);
            }
            match (&summary.table, output) {
                (Some(table), Some(output_path)) => std::fs::write(output_path, table)?,
                (Some(table), None) => print!("{table}"),
                // Nothing to show; do not leave an earlier table behind
                (None, Some(output_path)) => std::fs::write(output_path, "")?,
                (None, None) => {}
            }
        }
    }
    Ok(())
}
