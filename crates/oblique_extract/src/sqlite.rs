//! Card database export.

use crate::{ExtractResult, Extractor, RawExtraction};
use oblique_error::{ExtractError, ExtractErrorKind};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags};
use std::path::PathBuf;

/// Text-bearing columns, read in this order.
const SOURCE_COLUMNS: &[(&str, &str)] = &[
    ("cards", "question"),
    ("cards", "answer"),
    ("data_for_fact", "value"),
];

/// Deck labels that appear as cell values but are not questions.
const STOP_WORDS: &[&str] = &["インスピレーション", "Oblique"];

/// Reads question text out of a SQLite card database.
#[derive(Debug, Clone)]
pub struct SqliteExtractor {
    path: PathBuf,
}

impl SqliteExtractor {
    /// Create an extractor for the database at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> ExtractResult<Connection> {
        Connection::open_with_flags(&self.path, OpenFlags::SQLITE_OPEN_READ_ONLY).map_err(|e| {
            ExtractError::new(ExtractErrorKind::Database(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })
    }
}

impl Extractor for SqliteExtractor {
    fn name(&self) -> &'static str {
        "db"
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn extract(&self) -> ExtractResult<RawExtraction> {
        let conn = self.open()?;

        let mut cells = Vec::new();
        for (table, column) in SOURCE_COLUMNS {
            match read_column(&conn, table, column) {
                Ok(values) => {
                    tracing::debug!(table, column, count = values.len(), "Read column");
                    cells.extend(values);
                }
                Err(e) => {
                    tracing::debug!(table, column, error = %e, "Skipping unreadable column");
                }
            }
        }

        Ok(clean_cells(cells))
    }
}

fn read_column(conn: &Connection, table: &str, column: &str) -> rusqlite::Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("SELECT {column} FROM {table}"))?;
    let mut rows = stmt.query([])?;

    let mut values = Vec::new();
    while let Some(row) = rows.next()? {
        let text = match row.get_ref(0)? {
            ValueRef::Null => continue,
            ValueRef::Integer(i) => i.to_string(),
            ValueRef::Real(f) => f.to_string(),
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => decode_utf8_ignoring_invalid(bytes),
        };
        values.push(text);
    }
    Ok(values)
}

/// Decode UTF-8, dropping invalid byte sequences instead of substituting U+FFFD.
fn decode_utf8_ignoring_invalid(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// Trim cell values and drop deck labels.
///
/// # Examples
///
/// ```
/// use oblique_extract::clean_cells;
///
/// let cells = vec![" Oblique ".into(), "\r\n何が怖い？\r\n".into(), "  ".into()];
/// let extraction = clean_cells(cells);
/// assert_eq!(extraction.raw, 2);
/// assert_eq!(extraction.cleaned, vec!["何が怖い？".to_string()]);
/// ```
pub fn clean_cells(cells: Vec<String>) -> RawExtraction {
    let raw: Vec<String> = cells
        .into_iter()
        .map(|cell| cell.trim().to_string())
        .filter(|cell| !cell.is_empty())
        .collect();

    let cleaned = raw
        .iter()
        .map(|cell| cell.replace('\r', "").trim().to_string())
        .filter(|cell| !cell.is_empty() && !STOP_WORDS.contains(&cell.as_str()))
        .collect();

    RawExtraction {
        raw: raw.len(),
        cleaned,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_utf8_is_dropped() {
        let bytes = [b"\xe4\xbd\x95".as_slice(), b"\xff\xfe".as_slice(), "が怖い？".as_bytes()].concat();
        assert_eq!(decode_utf8_ignoring_invalid(&bytes), "何が怖い？");
        assert_eq!(decode_utf8_ignoring_invalid(b"\xe4\xbd"), "");
    }

    #[test]
    fn test_valid_replacement_character_is_kept() {
        assert_eq!(decode_utf8_ignoring_invalid("a\u{FFFD}b".as_bytes()), "a\u{FFFD}b");
    }
}
