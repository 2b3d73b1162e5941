//! Today pointer persistence.

use crate::json_file::{read_json, write_json_atomic};
use crate::StorageResult;
use oblique_core::TodayPointer;
use std::path::{Path, PathBuf};

/// Reads and replaces the `{"q": "..."}` file.
#[derive(Debug, Clone)]
pub struct TodayStore {
    path: PathBuf,
}

impl TodayStore {
    /// Create a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the today file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current pointer.
    pub fn read(&self) -> StorageResult<TodayPointer> {
        read_json(&self.path)
    }

    /// Overwrite the pointer.
    #[tracing::instrument(skip(self, today), fields(path = %self.path.display()))]
    pub fn write(&self, today: &TodayPointer) -> StorageResult<()> {
        write_json_atomic(&self.path, today)?;
        tracing::info!(question = %today.question(), "Published today's question");
        Ok(())
    }
}
