//! reelbase - one-shot movie catalog ETL
//!
//! Scans the configured source directory for provider feeds, normalizes
//! and merges them, and writes the dated canonical and merged artifacts.
//!
//! Usage: `reelbase [--batch]`
//!
//! `--batch` (or `alternate`) ingests the `raw_new` drop directory instead
//! of the standing `raw` directory. `REELBASE_DATA_DIR` overrides the data
//! root (default `data`).

use reelbase_core::{run, RunConfig, SourceSelection};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let source = if std::env::args()
        .skip(1)
        .any(|arg| arg == "--batch" || arg == "alternate")
    {
        SourceSelection::Alternate
    } else {
        SourceSelection::Default
    };
    let data_root = std::env::var("REELBASE_DATA_DIR").unwrap_or_else(|_| "data".to_string());

    let config = RunConfig::new(PathBuf::from(data_root), source);
    let summary = run(&config)?;

    tracing::info!(
        "Run complete: {} rows from {} files -> {} canonical ({} skipped) -> {} movies",
        summary.rows_extracted,
        summary.files_read,
        summary.records_normalized,
        summary.rows_skipped,
        summary.merged_count
    );
    if summary.files_failed > 0 {
        tracing::warn!("{} provider files could not be read", summary.files_failed);
    }

    Ok(())
}
