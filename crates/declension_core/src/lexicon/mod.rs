//! Lexicon data shared by the import path and the SQLite analyzer.
//!
//! # Responsibility
//! - Normalize surface text into lookup keys.
//! - Load tab-separated paradigm files into the lexicon store.
//!
//! # Invariants
//! - Import and lookup use the same key normalization.

use once_cell::sync::Lazy;
use regex::Regex;

pub mod import;

pub use import::{
    import_lexicon, import_lexicon_file, parse_lexicon_line, ImportSummary, LexiconEntry,
    LexiconImportError,
};

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Normalizes surface text into a lexicon lookup key.
///
/// Trims, lowercases, collapses inner whitespace and folds `ё` into `е`.
pub fn lookup_key(text: &str) -> String {
    let lowered = text.trim().to_lowercase().replace('ё', "е");
    WHITESPACE_RE.replace_all(&lowered, " ").into_owned()
}
