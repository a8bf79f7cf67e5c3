//! JSON provider feed reader

use crate::reader::{IoError, IoResult};
use reel_domain::RawRecord;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a JSON provider file into raw records.
///
/// Accepts either a top-level array of objects or a wrapper object carrying
/// a `records` array. Each element must be an object; anything else fails
/// the whole file so the orchestrator can skip it.
pub fn read_json_records(path: &Path) -> IoResult<Vec<RawRecord>> {
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }

    let file = File::open(path).map_err(|e| IoError::OpenFailed(e.to_string()))?;
    let value: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| IoError::InvalidFormat(e.to_string()))?;

    let rows = match value {
        Value::Array(rows) => rows,
        Value::Object(mut wrapper) => match wrapper.remove("records") {
            Some(Value::Array(rows)) => rows,
            _ => {
                return Err(IoError::InvalidFormat(
                    "expected a top-level array or an object with a `records` array".to_string(),
                ))
            }
        },
        _ => {
            return Err(IoError::InvalidFormat(
                "expected a top-level array or an object with a `records` array".to_string(),
            ))
        }
    };

    rows.into_iter()
        .map(|row| match row {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(IoError::InvalidFormat(format!(
                "expected an object per row, got: {other}"
            ))),
        })
        .collect()
}
