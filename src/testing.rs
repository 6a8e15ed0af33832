//! Test fixtures: measurement-file builders shared by the integration tests.

use anyhow::{Context, Result};
use std::io::Write;
use tempfile::NamedTempFile;

/// Write `lines` verbatim to a fresh temp file and return its handle.
///
/// The file lives as long as the returned handle; tests keep it in scope for
/// the duration of the run.
///
/// # Errors
/// Returns an error if the temp file cannot be created or written.
pub fn raw_measurements_file(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("create temp measurements file")?;
    file.write_all(contents.as_bytes())
        .context("write temp measurements file")?;
    file.flush().context("flush temp measurements file")?;
    Ok(file)
}

/// Build a well-formed measurements file from `(name, value)` pairs, one
/// `name;value` record per line, newline-terminated.
///
/// Values are rendered with exactly one fractional digit, matching the input
/// encoding.
///
/// # Errors
/// See [`raw_measurements_file`].
pub fn measurements_file(records: &[(&str, f64)]) -> Result<NamedTempFile> {
    let mut contents = String::new();
    for (name, value) in records {
        contents.push_str(name);
        contents.push(';');
        contents.push_str(&format!("{value:.1}"));
        contents.push('\n');
    }
    raw_measurements_file(&contents)
}

/// A small fixed dataset with repeated entities, negatives, and values on
/// both sides of zero.
#[must_use]
pub fn sample_records() -> Vec<(&'static str, f64)> {
    vec![
        ("Hamburg", 12.0),
        ("Bulawayo", 8.9),
        ("Palembang", 38.8),
        ("Hamburg", 34.2),
        ("Ouagadougou", 15.2),
        ("Cracow", 12.6),
        ("Bridgetown", 26.9),
        ("Istanbul", 6.2),
        ("Roseau", 34.4),
        ("Conakry", 31.2),
        ("Istanbul", 23.0),
        ("Accra", -10.1),
        ("Denver", 0.0),
        ("Accra", -3.4),
    ]
}
