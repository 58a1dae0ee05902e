use crate::types::errors::Error;
use crate::types::models::{CoverageSummary, Options};
use std::path::Path;

/// Where coverage reports are read from
pub trait ReportSource {
    fn exists(&self, path: &Path) -> bool;

    fn read_to_string(&self, path: &Path) -> Result<String, Error>;
}

/// Reads reports from the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsSource;

impl ReportSource for FsSource {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_to_string(&self, path: &Path) -> Result<String, Error> {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Load reporter options from a JSON config file
pub fn load_options(config_path: &Path) -> Result<Options, Error> {
    let content = std::fs::read_to_string(config_path)?;
    let options = serde_json::from_str(&content)?;
    log::debug!("Loaded options from {}", config_path.display());
    Ok(options)
}

/// Save the summary to a JSON file
pub fn save_summary(summary: &CoverageSummary, output_path: &Path) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(summary)?;
    std::fs::write(output_path, json)?;
    Ok(())
}
