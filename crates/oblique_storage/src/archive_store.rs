//! Archive persistence.

use crate::json_file::{read_json, write_json_atomic};
use crate::StorageResult;
use oblique_core::{Archive, Question};
use oblique_error::{StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Reads and replaces the archive file.
///
/// The file holds a JSON array of strings. Anything else is reported as
/// [`StorageErrorKind::InvalidFormat`].
#[derive(Debug, Clone)]
pub struct ArchiveStore {
    path: PathBuf,
}

impl ArchiveStore {
    /// Create a store backed by `path`. Nothing is touched until load/save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the archive file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the archive.
    ///
    /// Later duplicates in the file are dropped with a warning.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> StorageResult<Archive> {
        let questions: Vec<Question> = read_json(&self.path)?;
        let total = questions.len();
        let archive = Archive::from_questions(questions);

        if archive.len() != total {
            tracing::warn!(
                total,
                unique = archive.len(),
                "Archive file contains duplicates; keeping first occurrences"
            );
        }

        tracing::debug!(count = archive.len(), "Loaded archive");
        Ok(archive)
    }

    /// Load the archive and require at least `min` entries.
    ///
    /// # Errors
    ///
    /// [`StorageErrorKind::TooSmall`] if fewer than `min` questions are present,
    /// plus every error [`ArchiveStore::load`] can return.
    pub fn load_with_min(&self, min: usize) -> StorageResult<Archive> {
        let archive = self.load()?;
        if archive.len() < min {
            return Err(StorageError::new(StorageErrorKind::TooSmall {
                found: archive.len(),
                required: min,
            }));
        }
        Ok(archive)
    }

    /// Replace the archive file with `archive`.
    #[tracing::instrument(skip(self, archive), fields(path = %self.path.display(), count = archive.len()))]
    pub fn save(&self, archive: &Archive) -> StorageResult<()> {
        write_json_atomic(&self.path, archive)?;
        tracing::info!("Saved archive");
        Ok(())
    }
}
