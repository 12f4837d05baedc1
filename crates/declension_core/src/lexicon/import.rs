//! Tab-separated lexicon import.
//!
//! # Responsibility
//! - Validate paradigm lines (six case columns plus optional rank).
//! - Persist lexemes and their word forms atomically.
//!
//! # Invariants
//! - A failed import leaves the store unchanged (single transaction).
//! - Every imported lexeme has at least one word form.

use crate::db::DbError;
use crate::lexicon::lookup_key;
use crate::model::case::CaseTag;
use log::{error, info};
use rusqlite::{params, Connection};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

const MISSING_FORM_MARKER: &str = "-";
const COMMENT_PREFIX: char = '#';
// Leading UTF-8 BOM; `str::trim` does not strip it.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// One parsed paradigm line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    /// Forms in `CaseTag::ALL` order; `None` means no form for that case.
    pub forms: [Option<String>; CaseTag::COUNT],
    /// Higher rank wins when several lexemes share a surface form.
    pub rank: i64,
}

impl LexiconEntry {
    /// Returns the stored form for one case.
    pub fn form(&self, case: CaseTag) -> Option<&str> {
        self.forms[case.index()].as_deref()
    }

    /// Dictionary form: nominative when present, else the first available form.
    pub fn lemma(&self) -> Option<&str> {
        self.forms.iter().flatten().next().map(String::as_str)
    }

    /// Number of cases with a form.
    pub fn form_count(&self) -> usize {
        self.forms.iter().flatten().count()
    }
}

/// Import totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub lexemes: usize,
    pub forms: usize,
}

#[derive(Debug)]
pub enum LexiconImportError {
    Io(std::io::Error),
    Db(DbError),
    InvalidLine { line: usize, reason: String },
}

impl Display for LexiconImportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read lexicon: {err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidLine { line, reason } => {
                write!(f, "invalid lexicon line {line}: {reason}")
            }
        }
    }
}

impl Error for LexiconImportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidLine { .. } => None,
        }
    }
}

impl From<std::io::Error> for LexiconImportError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<DbError> for LexiconImportError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for LexiconImportError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Parses one lexicon line.
///
/// Returns `Ok(None)` for blank and `#` comment lines. `line_no` is 1-based
/// and only used for error reporting.
pub fn parse_lexicon_line(
    line: &str,
    line_no: usize,
) -> Result<Option<LexiconEntry>, LexiconImportError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_PREFIX) {
        return Ok(None);
    }

    let columns: Vec<&str> = line.split('\t').collect();
    if columns.len() != CaseTag::COUNT && columns.len() != CaseTag::COUNT + 1 {
        return Err(invalid_line(
            line_no,
            format!(
                "expected {} or {} tab-separated columns, got {}",
                CaseTag::COUNT,
                CaseTag::COUNT + 1,
                columns.len()
            ),
        ));
    }

    let forms: [Option<String>; CaseTag::COUNT] = std::array::from_fn(|idx| {
        let value = columns[idx].trim();
        if value.is_empty() || value == MISSING_FORM_MARKER {
            None
        } else {
            Some(value.to_string())
        }
    });
    if forms.iter().all(Option::is_none) {
        return Err(invalid_line(line_no, "line has no word forms".to_string()));
    }

    let rank = match columns.get(CaseTag::COUNT).map(|value| value.trim()) {
        None | Some("") => 0,
        Some(value) => value.parse::<i64>().map_err(|_| {
            invalid_line(line_no, format!("rank must be an integer, got `{value}`"))
        })?,
    };

    Ok(Some(LexiconEntry { forms, rank }))
}

/// Imports every paradigm line from `reader` in one transaction.
pub fn import_lexicon(
    conn: &mut Connection,
    reader: impl BufRead,
) -> Result<ImportSummary, LexiconImportError> {
    let started_at = Instant::now();
    match import_lexicon_inner(conn, reader) {
        Ok(summary) => {
            info!(
                "event=lexicon_import module=lexicon status=ok lexemes={} forms={} duration_ms={}",
                summary.lexemes,
                summary.forms,
                started_at.elapsed().as_millis()
            );
            Ok(summary)
        }
        Err(err) => {
            error!(
                "event=lexicon_import module=lexicon status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Opens `path` and imports it with [`import_lexicon`].
pub fn import_lexicon_file(
    conn: &mut Connection,
    path: impl AsRef<Path>,
) -> Result<ImportSummary, LexiconImportError> {
    let file = File::open(path)?;
    import_lexicon(conn, BufReader::new(file))
}

fn import_lexicon_inner(
    conn: &mut Connection,
    reader: impl BufRead,
) -> Result<ImportSummary, LexiconImportError> {
    let tx = conn.transaction()?;
    let mut summary = ImportSummary::default();
    {
        let mut insert_lexeme =
            tx.prepare("INSERT INTO lexemes (lemma, rank) VALUES (?1, ?2);")?;
        let mut insert_form = tx.prepare(
            "INSERT INTO word_forms (lexeme_id, case_tag, form, form_key)
             VALUES (?1, ?2, ?3, ?4);",
        )?;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line = if idx == 0 {
                line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line.as_str())
            } else {
                line.as_str()
            };
            let Some(entry) = parse_lexicon_line(line, idx + 1)? else {
                continue;
            };
            let lemma = entry.lemma().unwrap_or_default();
            insert_lexeme.execute(params![lemma, entry.rank])?;
            let lexeme_id = tx.last_insert_rowid();

            for case in CaseTag::ALL {
                if let Some(form) = entry.form(case) {
                    insert_form.execute(params![
                        lexeme_id,
                        case.as_str(),
                        form,
                        lookup_key(form)
                    ])?;
                }
            }
            summary.lexemes += 1;
            summary.forms += entry.form_count();
        }
    }
    tx.commit()?;
    Ok(summary)
}

fn invalid_line(line: usize, reason: String) -> LexiconImportError {
    LexiconImportError::InvalidLine { line, reason }
}
