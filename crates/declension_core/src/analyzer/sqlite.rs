//! SQLite lexicon-backed morphological analyzer.
//!
//! # Responsibility
//! - Resolve surface text to lexemes stored in the lexicon database.
//! - Look up case forms of a resolved lexeme.
//!
//! # Invariants
//! - Construction fails unless the schema is current and the lexicon is non-empty.
//! - Candidates matched through a nominative form rank first, then by lexeme
//!   rank (descending), then by import order.
//! - Query methods never write to the database.

use crate::analyzer::{AnalyzerResult, MorphAnalyzer};
use crate::db::migrations::{current_user_version, latest_version};
use crate::db::DbError;
use crate::lexicon::lookup_key;
use crate::model::case::CaseTag;
use log::info;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

const PARSE_SQL: &str = "SELECT
    wf.lexeme_id,
    l.lemma,
    MIN(CASE WHEN wf.case_tag = 'nomn' THEN 0 ELSE 1 END) AS nominal_match,
    l.rank
FROM word_forms wf
JOIN lexemes l ON l.id = wf.lexeme_id
WHERE wf.form_key = ?1
GROUP BY wf.lexeme_id, l.lemma, l.rank
ORDER BY nominal_match ASC, l.rank DESC, wf.lexeme_id ASC;";

const INFLECT_SQL: &str = "SELECT form
FROM word_forms
WHERE lexeme_id = ?1 AND case_tag = ?2;";

/// One lexeme interpretation of an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexemeCandidate {
    pub lexeme_id: i64,
    pub lemma: String,
}

/// Fatal analyzer construction errors.
#[derive(Debug)]
pub enum AnalyzerInitError {
    Db(DbError),
    SchemaMismatch { found: u32, expected: u32 },
    EmptyLexicon,
}

impl Display for AnalyzerInitError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "failed to open lexicon: {err}"),
            Self::SchemaMismatch { found, expected } => write!(
                f,
                "lexicon schema version {found} does not match expected {expected}"
            ),
            Self::EmptyLexicon => write!(f, "lexicon contains no lexemes"),
        }
    }
}

impl Error for AnalyzerInitError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::SchemaMismatch { .. } => None,
            Self::EmptyLexicon => None,
        }
    }
}

impl From<DbError> for AnalyzerInitError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for AnalyzerInitError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Analyzer answering from a lexicon database connection.
pub struct SqliteMorphAnalyzer<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMorphAnalyzer<'conn> {
    /// Validates the lexicon behind `conn` and returns a ready analyzer.
    pub fn try_new(conn: &'conn Connection) -> Result<Self, AnalyzerInitError> {
        let found = current_user_version(conn)?;
        let expected = latest_version();
        if found != expected {
            return Err(AnalyzerInitError::SchemaMismatch { found, expected });
        }

        let lexemes: i64 = conn.query_row("SELECT COUNT(*) FROM lexemes;", [], |row| row.get(0))?;
        if lexemes == 0 {
            return Err(AnalyzerInitError::EmptyLexicon);
        }

        info!(
            "event=analyzer_init module=analyzer status=ok backend=sqlite lexemes={}",
            lexemes
        );
        Ok(Self { conn })
    }
}

impl MorphAnalyzer for SqliteMorphAnalyzer<'_> {
    type Candidate = LexemeCandidate;

    fn parse(&self, text: &str) -> AnalyzerResult<Vec<LexemeCandidate>> {
        let key = lookup_key(text);
        if key.is_empty() {
            return Ok(Vec::new());
        }

        let mut stmt = self.conn.prepare_cached(PARSE_SQL)?;
        let rows = stmt.query_map(params![key], |row| {
            Ok(LexemeCandidate {
                lexeme_id: row.get(0)?,
                lemma: row.get(1)?,
            })
        })?;

        let mut candidates = Vec::new();
        for row in rows {
            candidates.push(row?);
        }
        Ok(candidates)
    }

    fn inflect(
        &self,
        candidate: &LexemeCandidate,
        case: CaseTag,
    ) -> AnalyzerResult<Option<String>> {
        let mut stmt = self.conn.prepare_cached(INFLECT_SQL)?;
        let form = stmt
            .query_row(params![candidate.lexeme_id, case.as_str()], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(form)
    }
}
