//! Declension use-case service.
//!
//! # Responsibility
//! - Turn one input text into a complete per-case result.
//! - Absorb analyzer failures into per-case fallback.
//!
//! # Invariants
//! - `declension` always returns all six cases; analyzer failures never escape.
//! - Only the best-ranked parse candidate is used.
//! - A failure for one case never changes the outcome for another.
//! - Input text is never logged; only its length is.

use crate::analyzer::MorphAnalyzer;
use crate::model::case::CaseTag;
use crate::model::inflection::InflectionResult;
use log::debug;

/// Use-case service producing case declensions through an injected analyzer.
pub struct InflectionService<A: MorphAnalyzer> {
    analyzer: A,
}

impl<A: MorphAnalyzer> InflectionService<A> {
    /// Creates a service over an already initialized analyzer.
    pub fn new(analyzer: A) -> Self {
        Self { analyzer }
    }

    /// Returns the injected analyzer.
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Declines `text` into every grammatical case.
    ///
    /// # Contract
    /// - Every case starts as `text` and is replaced only by a non-empty
    ///   inflected form of the first parse candidate.
    /// - No candidates or a parse error yields the baseline result.
    pub fn declension(&self, text: &str) -> InflectionResult {
        let mut result = InflectionResult::baseline(text);
        let text_len = text.chars().count();

        let candidates = match self.analyzer.parse(text) {
            Ok(candidates) => candidates,
            Err(err) => {
                debug!(
                    "event=declension module=service status=degraded reason=analyzer_error stage=parse text_len={} error={}",
                    text_len, err
                );
                return result;
            }
        };
        let Some(best) = candidates.first() else {
            debug!(
                "event=declension module=service status=degraded reason=no_candidates text_len={}",
                text_len
            );
            return result;
        };

        let mut inflected = 0usize;
        for case in CaseTag::ALL {
            match self.analyzer.inflect(best, case) {
                Ok(Some(form)) if !form.is_empty() => {
                    result.set_form(case, form);
                    inflected += 1;
                }
                Ok(_) => debug!(
                    "event=declension module=service status=degraded reason=no_form case={}",
                    case
                ),
                Err(err) => debug!(
                    "event=declension module=service status=degraded reason=analyzer_error stage=inflect case={} error={}",
                    case, err
                ),
            }
        }

        debug!(
            "event=declension module=service status=ok text_len={} candidates={} inflected={}",
            text_len,
            candidates.len(),
            inflected
        );
        result
    }
}
