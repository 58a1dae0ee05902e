use crate::coverage::index::CoverageIndex;
use crate::matcher::in_scope;
use crate::types::errors::Error;
use crate::types::models::{Column, Finding, MatchedRecord, Options, Threshold};
use crate::utils::io::{FsSource, ReportSource};
use std::collections::HashSet;

const TABLE_TITLE: &str = "## Code coverage\n";
const TABLE_COLUMN_LINE: &str = "-----";

/// Warns about and tabulates coverage of changed files
pub struct Reporter<S = FsSource> {
    index: CoverageIndex<S>,
    options: Options,
    changed_files: HashSet<String>,
}

impl Reporter<FsSource> {
    pub fn new(options: Options, changed_files: HashSet<String>) -> Self {
        Self::with_source(FsSource, options, changed_files)
    }
}

impl<S: ReportSource> Reporter<S> {
    pub fn with_source(source: S, options: Options, changed_files: HashSet<String>) -> Self {
        Self {
            index: CoverageIndex::with_source(source, options.report.clone()),
            options,
            changed_files,
        }
    }

    /// Records of changed files, in report order
    pub fn matched_records(&self) -> Result<Vec<MatchedRecord<'_>>, Error> {
        let records = self.index.records()?;
        let matched = in_scope(
            records,
            &self.changed_files,
            self.options.filename_prefix.as_deref(),
        );
        log::debug!(
            "{} of {} coverage records belong to changed files",
            matched.len(),
            records.len()
        );
        Ok(matched)
    }

    /// One finding per changed file whose total coverage is below `threshold`
    pub fn warn_if_file_less_than(&self, threshold: &Threshold) -> Result<Vec<Finding>, Error> {
        let findings = self
            .matched_records()?
            .into_iter()
            .filter(|item| item.record.total_percentage() < threshold.value())
            .map(|item| Finding {
                file: item.display_name().to_string(),
                total_percentage: item.record.total_percentage(),
                message: format!(
                    "{} has less than {}% coverage",
                    item.display_name(),
                    threshold
                ),
            })
            .collect();
        Ok(findings)
    }

    /// Markdown coverage table of changed files, or `None` when no changed file
    /// appears in the report
    pub fn show_coverage(&self) -> Result<Option<String>, Error> {
        let matched = self.matched_records()?;
        if matched.is_empty() {
            return Ok(None);
        }

        let mut table = String::from(TABLE_TITLE);
        table.push_str(&render_table(&matched, &self.options.columns));
        Ok(Some(table))
    }
}

/// Pipe-delimited table with the total column, then line and branch if requested
pub fn render_table(items: &[MatchedRecord<'_>], columns: &[Column]) -> String {
    let line = columns.contains(&Column::Line);
    let branch = columns.contains(&Column::Branch);

    let mut table = String::from("File|Total");
    if line {
        table.push_str("|Line");
    }
    if branch {
        table.push_str("|Branch");
    }
    table.push('\n');

    let column_count = 2 + usize::from(line) + usize::from(branch);
    table.push_str(&vec![TABLE_COLUMN_LINE; column_count].join("|"));
    table.push('\n');

    for item in items {
        table.push_str(item.display_name());
        table.push('|');
        table.push_str(&format_coverage(item.record.total_percentage()));
        if line {
            table.push('|');
            table.push_str(&format_coverage(item.record.line_rate));
        }
        if branch {
            table.push('|');
            table.push_str(&format_coverage(item.record.branch_rate));
        }
        table.push('\n');
    }

    table
}

/// Two decimal places, e.g. 93.333 -> "93.33"
pub fn format_coverage(coverage: f64) -> String {
    format!("{coverage:.2}")
}
