use crate::types::models::{CoverageRecord, MatchedRecord};
use crate::utils::paths::prefixed_path;
use std::collections::HashSet;

// The changed path a report file name corresponds to, if that path was changed
pub fn matched_path<'a>(
    record_file_name: &str,
    changed_files: &'a HashSet<String>,
    prefix: Option<&str>,
) -> Option<&'a str> {
    if record_file_name.is_empty() {
        return None;
    }
    let expected = prefixed_path(record_file_name, prefix);
    changed_files.get(&*expected).map(String::as_str)
}

// Full-path equality after applying the prefix; no globbing or case folding
pub fn is_match(
    record_file_name: &str,
    changed_files: &HashSet<String>,
    prefix: Option<&str>,
) -> bool {
    matched_path(record_file_name, changed_files, prefix).is_some()
}

// Records that belong to changed files, keeping report order
pub fn in_scope<'a>(
    records: &'a [CoverageRecord],
    changed_files: &'a HashSet<String>,
    prefix: Option<&str>,
) -> Vec<MatchedRecord<'a>> {
    records
        .iter()
        .filter_map(|record| {
            matched_path(&record.file_name, changed_files, prefix)
                .map(|changed_path| MatchedRecord { record, changed_path })
        })
        .collect()
}
