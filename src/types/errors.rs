use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cobertura report not set. Use '--report path/to/my/report.xml'.")]
    ReportNotSet,

    #[error("No file found at {}", .0.display())]
    ReportNotFound(PathBuf),

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),
}
