use crate::types::errors::Error;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Coverage of one `class` element in a Cobertura report, with rates stored as percentages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageRecord {
    pub file_name: String,
    pub line_rate: f64,
    pub branch_rate: f64,
}

impl CoverageRecord {
    /// Mean of the line and branch percentages
    pub fn total_percentage(&self) -> f64 {
        (self.line_rate + self.branch_rate) / 2.0
    }
}

/// A record that matched one of the changed files
#[derive(Debug, Clone, Copy)]
pub struct MatchedRecord<'a> {
    pub record: &'a CoverageRecord,
    /// The changed path the record was matched against
    pub changed_path: &'a str,
}

impl<'a> MatchedRecord<'a> {
    /// Base name of the matched changed path, as shown in warnings and tables
    pub fn display_name(&self) -> &'a str {
        crate::utils::paths::base_name(self.changed_path)
    }
}

/// Optional table columns shown after the total
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    /// Line rate percentage
    Line,
    /// Branch rate percentage
    Branch,
}

/// How command results are written out
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Warnings on stderr, markdown table on stdout
    #[default]
    Text,
    /// A single JSON summary of findings and table
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Reporter configuration, loadable from a JSON config file
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Path to the Cobertura XML report
    pub report: Option<PathBuf>,
    /// Directory prefix carried by changed paths but not by report paths
    pub filename_prefix: Option<String>,
    /// Extra columns for the coverage table
    pub columns: Vec<Column>,
}

/// Minimum coverage percentage, keeping the text it was given as
#[derive(Debug, Clone, PartialEq)]
pub struct Threshold {
    value: f64,
    text: String,
}

impl Threshold {
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl FromStr for Threshold {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let value: f64 = text
            .parse()
            .map_err(|_| Error::InvalidThreshold(s.to_string()))?;
        if value.is_nan() {
            return Err(Error::InvalidThreshold(s.to_string()));
        }
        Ok(Threshold {
            value,
            text: text.to_string(),
        })
    }
}

impl From<f64> for Threshold {
    fn from(value: f64) -> Self {
        Threshold {
            value,
            text: format!("{value:?}"),
        }
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// A changed file whose total coverage is below the threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub file: String,
    pub total_percentage: f64,
    pub message: String,
}

/// Everything a command produced, as written in JSON output
#[derive(Debug, Default, Serialize)]
pub struct CoverageSummary {
    pub findings: Vec<Finding>,
    pub table: Option<String>,
}
