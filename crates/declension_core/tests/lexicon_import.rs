use declension_core::db::open_db_in_memory;
use declension_core::{
    import_lexicon, import_lexicon_file, CaseTag, ImportSummary, InflectionService,
    LexiconImportError, SqliteMorphAnalyzer,
};
use rusqlite::Connection;

const TWO_LEXEMES: &str = "# comment\n\
книга\tкниги\tкниге\tкнигу\tкнигой\tкниге\t10\n\
\n\
-\tсаней\tсаням\t\tсанями\tсанях\n";

fn count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

#[test]
fn import_counts_lexemes_and_forms() {
    let mut conn = open_db_in_memory().unwrap();

    let summary = import_lexicon(&mut conn, TWO_LEXEMES.as_bytes()).unwrap();

    assert_eq!(
        summary,
        ImportSummary {
            lexemes: 2,
            forms: 10
        }
    );
    assert_eq!(count(&conn, "lexemes"), 2);
    assert_eq!(count(&conn, "word_forms"), 10);
}

#[test]
fn import_stores_lemma_rank_and_lookup_keys() {
    let mut conn = open_db_in_memory().unwrap();
    import_lexicon(&mut conn, "Ёлка\tёлки\tёлке\tёлку\tёлкой\tёлке\t3\n".as_bytes()).unwrap();

    let (lemma, rank): (String, i64) = conn
        .query_row("SELECT lemma, rank FROM lexemes;", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!(lemma, "Ёлка");
    assert_eq!(rank, 3);

    let (form, key): (String, String) = conn
        .query_row(
            "SELECT form, form_key FROM word_forms WHERE case_tag = 'nomn';",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(form, "Ёлка");
    assert_eq!(key, "елка");
}

#[test]
fn invalid_line_rolls_back_whole_import() {
    let mut conn = open_db_in_memory().unwrap();
    let input = "книга\tкниги\tкниге\tкнигу\tкнигой\tкниге\n\
                 стол\tстола\n";

    let err = import_lexicon(&mut conn, input.as_bytes()).unwrap_err();

    match err {
        LexiconImportError::InvalidLine { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(count(&conn, "lexemes"), 0);
    assert_eq!(count(&conn, "word_forms"), 0);
}

#[test]
fn repeated_imports_append_lexemes() {
    let mut conn = open_db_in_memory().unwrap();

    import_lexicon(&mut conn, TWO_LEXEMES.as_bytes()).unwrap();
    import_lexicon(&mut conn, TWO_LEXEMES.as_bytes()).unwrap();

    assert_eq!(count(&conn, "lexemes"), 4);
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut conn = open_db_in_memory().unwrap();

    let err = import_lexicon_file(&mut conn, dir.path().join("absent.tsv")).unwrap_err();

    assert!(matches!(err, LexiconImportError::Io(_)));
}

#[test]
fn leading_byte_order_mark_before_header_is_ignored() {
    let mut conn = open_db_in_memory().unwrap();
    let input = "\u{feff}# nomn\tgent\tdatv\taccs\tablt\tloct\t[rank]\n\
                 книга\tкниги\tкниге\tкнигу\tкнигой\tкниге\n";

    let summary = import_lexicon(&mut conn, input.as_bytes()).unwrap();

    assert_eq!(
        summary,
        ImportSummary {
            lexemes: 1,
            forms: 6
        }
    );
}

#[test]
fn leading_byte_order_mark_before_data_keeps_word_reachable() {
    let mut conn = open_db_in_memory().unwrap();
    import_lexicon(
        &mut conn,
        "\u{feff}книга\tкниги\tкниге\tкнигу\tкнигой\tкниге\n".as_bytes(),
    )
    .unwrap();

    let lemma: String = conn
        .query_row("SELECT lemma FROM lexemes;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(lemma, "книга");

    let service = InflectionService::new(SqliteMorphAnalyzer::try_new(&conn).unwrap());
    let result = service.declension("книга");
    assert_eq!(result.get(CaseTag::Nominative), "книга");
    assert_eq!(result.get(CaseTag::Genitive), "книги");
}

#[test]
fn byte_order_mark_after_first_line_is_not_stripped() {
    let mut conn = open_db_in_memory().unwrap();
    let input = "стол\tстола\tстолу\tстол\tстолом\tстоле\n\
                 \u{feff}# not a comment\tб\tв\tг\tд\tе\tx\n";

    let err = import_lexicon(&mut conn, input.as_bytes()).unwrap_err();

    assert!(matches!(err, LexiconImportError::InvalidLine { line: 2, .. }));
}
