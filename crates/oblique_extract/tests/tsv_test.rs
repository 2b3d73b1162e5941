use oblique_error::ExtractErrorKind;
use oblique_extract::{parse_tsv, run_extractor, Extractor, TsvExtractor};
use oblique_storage::ArchiveStore;

#[test]
fn test_parse_tsv_skips_header_and_short_rows() -> anyhow::Result<()> {
    let text = "front\tback\n\
                a\t何を急いでいる？\n\
                only-one-column\n\
                b\t   \n\
                c\t誰のための締め切り？\textra\n";

    let extraction = parse_tsv(text, "deck.tsv")?;
    assert_eq!(extraction.raw, 4);
    assert_eq!(
        extraction.cleaned,
        vec![
            "何を急いでいる？".to_string(),
            "誰のための締め切り？".to_string()
        ]
    );
    Ok(())
}

#[test]
fn test_parse_tsv_handles_crlf_and_blank_lines() -> anyhow::Result<()> {
    let text = "h1\th2\r\n\r\nx\tひとつ目\r\n\r\ny\tふたつ目\r\n";
    let extraction = parse_tsv(text, "deck.tsv")?;
    assert_eq!(extraction.raw, 2);
    assert_eq!(
        extraction.cleaned,
        vec!["ひとつ目".to_string(), "ふたつ目".to_string()]
    );
    Ok(())
}

#[test]
fn test_parse_tsv_header_only_is_empty_input() {
    for text in ["", "\n\n", "front\tback\n"] {
        let err = parse_tsv(text, "deck.tsv").expect_err("no data rows");
        assert_eq!(err.kind, ExtractErrorKind::EmptyInput("deck.tsv".to_string()));
    }
}

#[test]
fn test_tsv_extractor_dedupes_in_first_seen_order() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let input = dir.path().join("deck.tsv");
    std::fs::write(&input, "id\tq\n1\tB\n2\tA\n3\tB\n4\tC\n")?;

    let store = ArchiveStore::new(dir.path().join("questions.json"));
    let report = run_extractor(&TsvExtractor::new(&input), &store)?;

    assert_eq!(report.raw, 4);
    assert_eq!(report.cleaned, 4);
    assert_eq!(report.unique, 3);
    assert_eq!(
        report.to_string(),
        "tsv: extracted 4, after clean 4, unique 3"
    );

    let order: Vec<String> = store
        .load()?
        .iter()
        .map(|q| q.as_str().to_string())
        .collect();
    assert_eq!(order, vec!["B", "A", "C"]);
    Ok(())
}

#[test]
fn test_tsv_extractor_missing_file() {
    let err = TsvExtractor::new("/nonexistent/deck.tsv")
        .extract()
        .expect_err("missing file");
    assert!(matches!(err.kind, ExtractErrorKind::Read(_)));
}
