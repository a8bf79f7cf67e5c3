//! Run configuration
//!
//! An explicit value constructed at startup and handed to the pipeline.
//! The engine never reads ambient process state; environment lookups stay
//! at the binary edge.

use std::path::PathBuf;

/// Which source batch a run ingests
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SourceSelection {
    /// The standing `raw` directory
    #[default]
    Default,
    /// The `raw_new` drop directory for a freshly delivered batch
    Alternate,
}

impl SourceSelection {
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Default => "raw",
            Self::Alternate => "raw_new",
        }
    }
}

/// Everything a single pipeline run needs to know
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub data_root: PathBuf,
    pub source: SourceSelection,
    pub output_dir: PathBuf,
}

impl RunConfig {
    /// Standard layout under a data root: sources in `raw`/`raw_new`,
    /// artifacts in `processed`
    pub fn new(data_root: impl Into<PathBuf>, source: SourceSelection) -> Self {
        let data_root = data_root.into();
        let output_dir = data_root.join("processed");
        Self {
            data_root,
            source,
            output_dir,
        }
    }

    /// Directory the run ingests from
    pub fn source_dir(&self) -> PathBuf {
        self.data_root.join(self.source.dir_name())
    }
}
