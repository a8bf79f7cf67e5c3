//! CSV provider feed reader

use crate::reader::{IoError, IoResult};
use reel_domain::RawRecord;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a headered CSV file into raw records, one per row.
///
/// Every cell arrives as a string value; numeric coercion happens during
/// normalization, not here. Empty cells are kept and treated as absent by
/// the raw record's lookup rules.
pub fn read_csv_records(path: &Path) -> IoResult<Vec<RawRecord>> {
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| IoError::InvalidFormat(e.to_string()))?
        .clone();

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| IoError::InvalidFormat(e.to_string()))?;
        let record: RawRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(header, cell)| (header.to_string(), Value::String(cell.to_string())))
            .collect();
        records.push(record);
    }

    Ok(records)
}
