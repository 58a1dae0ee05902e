use crate::coverage::cobertura::parse_cobertura;
use crate::types::errors::Error;
use crate::types::models::CoverageRecord;
use crate::utils::io::{FsSource, ReportSource};
use std::cell::OnceCell;
use std::path::PathBuf;

/// Records of one Cobertura report, parsed on first access and kept for the
/// lifetime of the index
pub struct CoverageIndex<S = FsSource> {
    source: S,
    report: Option<PathBuf>,
    records: OnceCell<Vec<CoverageRecord>>,
}

impl CoverageIndex<FsSource> {
    pub fn new(report: Option<PathBuf>) -> Self {
        Self::with_source(FsSource, report)
    }
}

impl<S: ReportSource> CoverageIndex<S> {
    pub fn with_source(source: S, report: Option<PathBuf>) -> Self {
        Self {
            source,
            report,
            records: OnceCell::new(),
        }
    }

    /// All records in document order. The report is only read and parsed once.
    pub fn records(&self) -> Result<&[CoverageRecord], Error> {
        if let Some(records) = self.records.get() {
            return Ok(records.as_slice());
        }
        let parsed = self.load()?;
        Ok(self.records.get_or_init(|| parsed).as_slice())
    }

    fn load(&self) -> Result<Vec<CoverageRecord>, Error> {
        let report = match self.report.as_deref() {
            Some(path) if !path.as_os_str().is_empty() => path,
            _ => return Err(Error::ReportNotSet),
        };
        if !self.source.exists(report) {
            return Err(Error::ReportNotFound(report.to_path_buf()));
        }

        let content = self.source.read_to_string(report)?;
        let records = parse_cobertura(&content)?;
        log::debug!(
            "Parsed {} coverage records from {}",
            records.len(),
            report.display()
        );
        Ok(records)
    }
}
