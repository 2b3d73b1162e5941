#![cfg(feature = "sqlite")]

use oblique_error::ExtractErrorKind;
use oblique_extract::{run_extractor, Extractor, SqliteExtractor};
use oblique_storage::ArchiveStore;
use rusqlite::Connection;
use std::path::Path;

fn create_export(path: &Path) -> anyhow::Result<()> {
    let conn = Connection::open(path)?;
    conn.execute_batch(
        "CREATE TABLE cards (question TEXT, answer TEXT);
         CREATE TABLE data_for_fact (value BLOB);",
    )?;
    conn.execute(
        "INSERT INTO cards (question, answer) VALUES (?1, ?2)",
        ("インスピレーション", "本当に必要なものは？\r\n"),
    )?;
    conn.execute(
        "INSERT INTO cards (question, answer) VALUES (?1, ?2)",
        ("  ", Option::<String>::None),
    )?;
    conn.execute(
        "INSERT INTO data_for_fact (value) VALUES (?1)",
        ("誰に見せたい？".as_bytes(),),
    )?;
    conn.execute(
        "INSERT INTO data_for_fact (value) VALUES (?1)",
        ("Oblique",),
    )?;
    conn.execute(
        "INSERT INTO data_for_fact (value) VALUES (?1)",
        ("本当に必要なものは？",),
    )?;
    Ok(())
}

#[test]
fn test_sqlite_extractor_reads_known_columns() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let db = dir.path().join("deck.db");
    create_export(&db)?;

    let extraction = SqliteExtractor::new(&db).extract()?;
    assert_eq!(extraction.raw, 5);
    assert_eq!(
        extraction.cleaned,
        vec![
            "本当に必要なものは？".to_string(),
            "誰に見せたい？".to_string(),
            "本当に必要なものは？".to_string(),
        ]
    );

    let store = ArchiveStore::new(dir.path().join("questions.json"));
    let report = run_extractor(&SqliteExtractor::new(&db), &store)?;
    assert_eq!(report.unique, 2);
    Ok(())
}

#[test]
fn test_sqlite_extractor_skips_missing_tables() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let db = dir.path().join("partial.db");
    {
        let conn = Connection::open(&db)?;
        conn.execute_batch(
            "CREATE TABLE data_for_fact (value TEXT);
             INSERT INTO data_for_fact (value) VALUES ('何から始める？');",
        )?;
    }

    let extraction = SqliteExtractor::new(&db).extract()?;
    assert_eq!(extraction.cleaned, vec!["何から始める？".to_string()]);
    Ok(())
}

#[test]
fn test_sqlite_extractor_missing_database() {
    let err = SqliteExtractor::new("/nonexistent/deck.db")
        .extract()
        .expect_err("missing database");
    assert!(matches!(err.kind, ExtractErrorKind::Database(_)));
}

#[test]
fn test_sqlite_extractor_drops_invalid_utf8_bytes() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let db = dir.path().join("broken.db");
    {
        let conn = Connection::open(&db)?;
        conn.execute_batch("CREATE TABLE data_for_fact (value BLOB);")?;
        let mut value = "どこで".as_bytes().to_vec();
        value.extend_from_slice(b"\xc3\x28");
        value.extend_from_slice("止まる？".as_bytes());
        conn.execute("INSERT INTO data_for_fact (value) VALUES (?1)", (value,))?;
    }

    let extraction = SqliteExtractor::new(&db).extract()?;
    assert_eq!(extraction.cleaned, vec!["どこで(止まる？".to_string()]);
    Ok(())
}
