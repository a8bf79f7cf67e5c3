//! Dated JSON output artifacts

use crate::reader::{IoError, IoResult};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Wrapper shape shared by both output artifacts
#[derive(Serialize)]
pub struct RecordBatch<'a, T: Serialize> {
    pub generated_at: String,
    pub records: &'a [T],
}

/// Build the dated artifact path: `<dir>/<prefix>_YYYY-MM-DD.json`
pub fn dated_path(dir: &Path, prefix: &str, date: NaiveDate) -> PathBuf {
    dir.join(format!("{}_{}.json", prefix, date.format("%Y-%m-%d")))
}

/// Write records under today's dated filename, overwriting any earlier run
/// from the same date. Returns the path written.
pub fn write_records<T: Serialize>(dir: &Path, prefix: &str, records: &[T]) -> IoResult<PathBuf> {
    std::fs::create_dir_all(dir).map_err(|e| IoError::WriteFailed(e.to_string()))?;

    let now = Local::now();
    let path = dated_path(dir, prefix, now.date_naive());
    let batch = RecordBatch {
        generated_at: now.to_rfc3339(),
        records,
    };

    let file = File::create(&path).map_err(|e| IoError::WriteFailed(e.to_string()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &batch)
        .map_err(|e| IoError::WriteFailed(e.to_string()))?;

    tracing::info!("Wrote {} records to {}", records.len(), path.display());
    Ok(path)
}
