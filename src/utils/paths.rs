use std::borrow::Cow;
use std::path::Path;

/// Drops one trailing separator from a filename prefix.
/// Example: "my_prefix_dir/" -> "my_prefix_dir"
pub fn normalize_prefix(prefix: &str) -> &str {
    prefix.strip_suffix('/').unwrap_or(prefix)
}

/// The changed-file path a report path corresponds to under an optional prefix.
/// Example: ("sub/two.py", Some("repo/")) -> "repo/sub/two.py"
pub fn prefixed_path<'a>(file_name: &'a str, prefix: Option<&str>) -> Cow<'a, str> {
    match prefix {
        Some(prefix) if !prefix.is_empty() => {
            Cow::Owned(format!("{}/{}", normalize_prefix(prefix), file_name))
        }
        _ => Cow::Borrowed(file_name),
    }
}

/// Final segment of a slash-separated path
pub fn base_name(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
