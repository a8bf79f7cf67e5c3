//! One-shot pipeline orchestration
//!
//! extract -> normalize -> group -> merge -> write. File and row failures
//! are skipped and counted, never fatal; only a missing source directory
//! or an unwritable output directory fails the run. The whole stage is
//! synchronous and in-memory.

use crate::config::RunConfig;
use crate::error::PipelineError;
use crate::{merge, normalize};
use reel_domain::CanonicalRecord;
use reel_io::{discover_source_files, read_records, write_records};

/// Filename prefix of the post-normalization, pre-merge artifact
pub const CANONICAL_PREFIX: &str = "movies_canonical";
/// Filename prefix of the final unified artifact
pub const MERGED_PREFIX: &str = "movies_merged";

/// Counters reported after a run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_read: usize,
    pub files_failed: usize,
    pub rows_extracted: usize,
    pub records_normalized: usize,
    pub rows_skipped: usize,
    pub merged_count: usize,
}

/// Run the pipeline once against the configured source directory.
///
/// Source files are processed in lexicographic filename order; that order,
/// plus row order within each file, is the precedence contract behind every
/// first-wins merge rule, so re-running against unchanged inputs reproduces
/// identical records.
pub fn run(config: &RunConfig) -> Result<RunSummary, PipelineError> {
    let source_dir = config.source_dir();
    tracing::info!("Scanning providers in {}", source_dir.display());

    let files = discover_source_files(&source_dir)?;
    tracing::info!("Found {} provider files", files.len());

    let mut summary = RunSummary::default();
    let mut canonical: Vec<CanonicalRecord> = Vec::new();

    for file in &files {
        let rows = match read_records(file) {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!("Skipping {}: {}", file.path.display(), err);
                summary.files_failed += 1;
                continue;
            }
        };
        tracing::info!("Extracted {} rows from {}", rows.len(), file.provider_id);
        summary.files_read += 1;
        summary.rows_extracted += rows.len();

        for row in &rows {
            match normalize::normalize(row, &file.provider_id, file.format) {
                Ok(record) => canonical.push(record),
                Err(err) => {
                    tracing::warn!("Skipping row: {}", err);
                    summary.rows_skipped += 1;
                }
            }
        }
    }

    summary.records_normalized = canonical.len();
    tracing::info!(
        "Normalized {} records ({} rows skipped)",
        summary.records_normalized,
        summary.rows_skipped
    );

    write_records(&config.output_dir, CANONICAL_PREFIX, &canonical)?;

    let merged = merge::merge_all(canonical);
    summary.merged_count = merged.len();
    tracing::info!("Merged into {} movies", summary.merged_count);

    write_records(&config.output_dir, MERGED_PREFIX, &merged)?;

    Ok(summary)
}
