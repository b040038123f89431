use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::core::{Dataset, RecordLayout};
use crate::error::{PlotError, PlotResult};

/// Produces the session dataset. Called once before any rendering.
///
/// Sources only fetch raw JSON; the record layout is owned by the plot
/// config and handed in by the caller.
pub trait DatasetSource {
    fn load(&self, layout: RecordLayout) -> PlotResult<Dataset>;
}

/// JSON dataset stored on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileSource {
    fn load(&self, layout: RecordLayout) -> PlotResult<Dataset> {
        let raw = fs::read_to_string(&self.path).map_err(|err| {
            PlotError::Fetch(format!("failed to read `{}`: {err}", self.path.display()))
        })?;
        let value: Value = serde_json::from_str(&raw).map_err(|err| {
            PlotError::Fetch(format!("invalid json in `{}`: {err}", self.path.display()))
        })?;
        let dataset = Dataset::from_json(value, layout)?;
        debug!(
            path = %self.path.display(),
            ?layout,
            records = dataset.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }
}

/// JSON dataset already held in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSource {
    value: Value,
}

impl StaticSource {
    #[must_use]
    pub fn new(value: Value) -> Self {
        Self { value }
    }
}

impl DatasetSource for StaticSource {
    fn load(&self, layout: RecordLayout) -> PlotResult<Dataset> {
        Dataset::from_json(self.value.clone(), layout)
    }
}
