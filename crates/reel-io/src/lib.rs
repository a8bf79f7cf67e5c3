//! reel-io - Provider feed I/O for the reelbase suite
//!
//! This crate is the thin I/O layer around the transform-and-merge core:
//!
//! - **Discovery**: scan a source directory for provider files, in the
//!   lexicographic filename order the merge precedence contract relies on
//! - **Extraction**: read CSV and JSON provider files into raw records
//! - **Load**: write dated, wrapped JSON artifacts
//!
//! All decision logic (field mapping, identity, merging) lives in
//! reelbase-core; nothing here interprets field values.

pub mod csv_reader;
pub mod json_reader;
pub mod output;
pub mod reader;

pub use output::{dated_path, write_records, RecordBatch};
pub use reader::{discover_source_files, read_records, IoError, IoResult, SourceFile};
