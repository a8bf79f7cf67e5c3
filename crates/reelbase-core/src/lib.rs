//! reelbase-core: transform-and-merge engine for the movie catalog
//!
//! A pure, single-threaded batch engine that turns heterogeneous provider
//! rows into one canonical, deduplicated dataset:
//! - schema normalization into the canonical record shape (`normalize`)
//! - exact identity resolution across providers (`identity`)
//! - deterministic field-level merging with provenance (`merge`)
//! - one-shot pipeline orchestration over a source directory (`pipeline`)
//!
//! Extraction and artifact writing live in reel-io; this crate holds every
//! decision the dataset's shape depends on.

pub mod config;
pub mod error;
pub mod identity;
pub mod merge;
pub mod normalize;
pub mod pipeline;

pub use config::{RunConfig, SourceSelection};
pub use error::{NormalizeError, PipelineError};
pub use identity::{identity_key, movie_id, normalize_title};
pub use merge::{group_by_identity, merge_all, merge_group};
pub use normalize::normalize;
pub use pipeline::{run, RunSummary};
