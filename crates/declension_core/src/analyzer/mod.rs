//! Morphological analyzer contracts and implementations.
//!
//! # Responsibility
//! - Define the capability the inflection service consumes.
//! - Keep analyzer backends swappable behind one trait.
//!
//! # Invariants
//! - `parse` returns candidates ranked best-first.
//! - `inflect` reports "no form" as `Ok(None)`, not as an error.
//! - Analyzer calls never mutate state observable by later calls.

use crate::db::DbError;
use crate::model::case::CaseTag;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;

pub mod sqlite;

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Runtime analyzer failure for one query.
#[derive(Debug)]
pub enum AnalyzerError {
    /// Storage backend failed while answering a query.
    Db(DbError),
    /// Backend-specific failure with a short diagnostic.
    Backend(String),
}

impl Display for AnalyzerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Backend(message) => write!(f, "analyzer backend failed: {message}"),
        }
    }
}

impl Error for AnalyzerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for AnalyzerError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for AnalyzerError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Morphological analyzer capability.
pub trait MorphAnalyzer {
    /// One grammatical interpretation of an input.
    type Candidate;

    /// Returns interpretations of `text`, best-ranked first. May be empty.
    fn parse(&self, text: &str) -> AnalyzerResult<Vec<Self::Candidate>>;

    /// Produces the form of `candidate` in `case`, or `None` when unavailable.
    fn inflect(&self, candidate: &Self::Candidate, case: CaseTag)
        -> AnalyzerResult<Option<String>>;
}

impl<A: MorphAnalyzer + ?Sized> MorphAnalyzer for &A {
    type Candidate = A::Candidate;

    fn parse(&self, text: &str) -> AnalyzerResult<Vec<Self::Candidate>> {
        (**self).parse(text)
    }

    fn inflect(
        &self,
        candidate: &Self::Candidate,
        case: CaseTag,
    ) -> AnalyzerResult<Option<String>> {
        (**self).inflect(candidate, case)
    }
}

impl<A: MorphAnalyzer + ?Sized> MorphAnalyzer for Box<A> {
    type Candidate = A::Candidate;

    fn parse(&self, text: &str) -> AnalyzerResult<Vec<Self::Candidate>> {
        (**self).parse(text)
    }

    fn inflect(
        &self,
        candidate: &Self::Candidate,
        case: CaseTag,
    ) -> AnalyzerResult<Option<String>> {
        (**self).inflect(candidate, case)
    }
}

impl<A: MorphAnalyzer + ?Sized> MorphAnalyzer for Arc<A> {
    type Candidate = A::Candidate;

    fn parse(&self, text: &str) -> AnalyzerResult<Vec<Self::Candidate>> {
        (**self).parse(text)
    }

    fn inflect(
        &self,
        candidate: &Self::Candidate,
        case: CaseTag,
    ) -> AnalyzerResult<Option<String>> {
        (**self).inflect(candidate, case)
    }
}
