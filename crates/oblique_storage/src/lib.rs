//! File persistence for the Oblique pipeline.
//!
//! Two single-writer JSON files make up the persisted state:
//!
//! - the archive, a pretty-printed JSON array of question strings
//! - the today pointer, `{"q": "..."}`
//!
//! Both are replaced atomically: the new content is written to a sibling
//! temporary file and renamed over the target, so a concurrent reader sees
//! either the old file or the new one, never a partial write.
//!
//! # Example
//!
//! ```rust
//! use oblique_core::{Archive, Question};
//! use oblique_storage::ArchiveStore;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = std::env::temp_dir().join("oblique-doc");
//! let store = ArchiveStore::new(dir.join("questions.json"));
//!
//! let archive = Archive::from_questions(["何を急いでいる？"]);
//! store.save(&archive)?;
//!
//! let loaded = store.load()?;
//! assert_eq!(loaded, archive);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod archive_store;
mod json_file;
mod today_store;

pub use archive_store::ArchiveStore;
pub use oblique_error::{StorageError, StorageErrorKind};
pub use today_store::TodayStore;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
