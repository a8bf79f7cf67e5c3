//! Error types for the transform-and-merge engine

use thiserror::Error;

/// Per-row normalization failure. The affected row is skipped and counted;
/// it never aborts the run.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NormalizeError {
    #[error("Missing or empty movie_title in row from provider {provider}")]
    MissingTitle { provider: String },
}

/// Run-level failure. Merging itself cannot fail; only upstream I/O can.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Io(#[from] reel_io::IoError),
}
