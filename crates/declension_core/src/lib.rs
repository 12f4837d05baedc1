//! Core declension logic: Russian case inflection over a pluggable analyzer.
//! This crate owns the totality and fallback guarantees of declension results.

pub mod analyzer;
pub mod db;
pub mod health;
pub mod lexicon;
pub mod logging;
pub mod model;
pub mod request;
pub mod service;

pub use analyzer::sqlite::{AnalyzerInitError, LexemeCandidate, SqliteMorphAnalyzer};
pub use analyzer::{AnalyzerError, AnalyzerResult, MorphAnalyzer};
pub use health::{core_version, health, HealthStatus};
pub use lexicon::{
    import_lexicon, import_lexicon_file, lookup_key, ImportSummary, LexiconImportError,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::case::{parse_case_tag, CaseTag, CaseTagError};
pub use model::inflection::InflectionResult;
pub use request::{DeclensionQuery, QueryError, MAX_QUERY_CHARS};
pub use service::inflection_service::InflectionService;
