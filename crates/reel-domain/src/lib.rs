//! Movie domain types shared across the reelbase suite
//!
//! This crate provides the canonical data models for the movie catalog ETL:
//! - RawRecord: one provider row as extracted, before normalization
//! - CanonicalRecord: a provider row normalized into the shared schema
//! - MergedRecord: the unified movie assembled across all providers
//! - SourceFormat: provider feed format tag

pub mod canonical;
pub mod merged;
pub mod raw;
pub mod source;

pub use canonical::*;
pub use merged::*;
pub use raw::*;
pub use source::*;
