//! Source file discovery and per-format dispatch

use crate::{csv_reader, json_reader};
use reel_domain::{RawRecord, SourceFormat};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading provider feeds or writing artifacts
#[derive(Debug, Error)]
pub enum IoError {
    #[error("Source directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Failed to write output: {0}")]
    WriteFailed(String),

    #[error("I/O error: {0}")]
    Io(String),
}

/// Result type for feed I/O
pub type IoResult<T> = Result<T, IoError>;

/// A discovered provider source file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Provider identifier, taken from the filename stem
    /// (`provider3_domestic.csv` -> `provider3_domestic`)
    pub provider_id: String,
    pub format: SourceFormat,
}

/// Scan a directory for provider files, sorted by filename.
///
/// Only `.csv` and `.json` files are kept (extension matched case
/// insensitively); anything else is skipped with a debug log. The
/// lexicographic filename order is the provider precedence contract the
/// merge engine relies on - callers must not reorder the result.
pub fn discover_source_files(dir: &Path) -> IoResult<Vec<SourceFile>> {
    if !dir.is_dir() {
        return Err(IoError::DirectoryNotFound(dir.display().to_string()));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| IoError::Io(e.to_string()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| IoError::Io(e.to_string()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(SourceFormat::from_extension);
        let Some(format) = format else {
            tracing::debug!("Skipping non-data file: {}", path.display());
            continue;
        };

        let Some(provider_id) = path.file_stem().and_then(|stem| stem.to_str()) else {
            tracing::debug!("Skipping file with unusable name: {}", path.display());
            continue;
        };

        files.push(SourceFile {
            provider_id: provider_id.to_string(),
            format,
            path,
        });
    }

    files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    Ok(files)
}

/// Read every row of a provider file as raw records
pub fn read_records(file: &SourceFile) -> IoResult<Vec<RawRecord>> {
    match file.format {
        SourceFormat::Csv => csv_reader::read_csv_records(&file.path),
        SourceFormat::Json => json_reader::read_json_records(&file.path),
    }
}
