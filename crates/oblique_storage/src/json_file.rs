//! Pretty JSON read/write with atomic replace.

use crate::StorageResult;
use oblique_error::{StorageError, StorageErrorKind};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Read and parse a JSON file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> StorageResult<T> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StorageError::new(StorageErrorKind::NotFound(path.display().to_string()))
        } else {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                path.display(),
                e
            )))
        }
    })?;

    serde_json::from_str(&text).map_err(|e| {
        StorageError::new(StorageErrorKind::InvalidFormat(format!(
            "{}: {}",
            path.display(),
            e
        )))
    })
}

/// Serialize `value` as two-space pretty JSON with a trailing newline and
/// atomically replace `path` with it.
pub(crate) fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> StorageResult<()> {
    let mut json = serde_json::to_string_pretty(value).map_err(|e| {
        StorageError::new(StorageErrorKind::InvalidFormat(format!(
            "serialize {}: {}",
            path.display(),
            e
        )))
    })?;
    json.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                parent.display(),
                e
            )))
        })?;
    }

    // Write to temp file first, then rename for atomicity
    let temp_path = temp_path_for(path);
    let written = fs::File::create(&temp_path).and_then(|mut file| {
        file.write_all(json.as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            temp_path.display(),
            e
        ))));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "rename {} to {}: {}",
            temp_path.display(),
            path.display(),
            e
        )))
    })?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "Replaced JSON file");
    Ok(())
}

/// Sibling temp path, unique per process so two runs never share one.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "oblique".to_string());
    path.with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
}
