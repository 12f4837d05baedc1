//! Declension result model.
//!
//! # Responsibility
//! - Hold exactly one word form per grammatical case.
//! - Serialize to the stable `{nomn, gent, datv, accs, ablt, loct}` JSON shape.
//!
//! # Invariants
//! - Every `CaseTag` always has an entry; there is no way to remove one.
//! - Entries are never empty for non-empty input: they start as the input
//!   text and are only replaced by non-empty forms.

use crate::model::case::CaseTag;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Total mapping from every case to one word form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InflectionResult {
    forms: [String; CaseTag::COUNT],
}

impl InflectionResult {
    /// Creates the fallback result where every case equals `text`.
    pub fn baseline(text: &str) -> Self {
        Self {
            forms: std::array::from_fn(|_| text.to_string()),
        }
    }

    /// Returns the word form for one case.
    pub fn get(&self, case: CaseTag) -> &str {
        self.forms[case.index()].as_str()
    }

    /// Replaces the word form for one case.
    ///
    /// Empty forms are ignored and the current entry is kept.
    /// Returns whether the entry was replaced.
    pub fn set_form(&mut self, case: CaseTag, form: impl Into<String>) -> bool {
        let form = form.into();
        if form.is_empty() {
            return false;
        }
        self.forms[case.index()] = form;
        true
    }

    /// Iterates `(case, form)` pairs in canonical case order.
    pub fn iter(&self) -> impl Iterator<Item = (CaseTag, &str)> + '_ {
        CaseTag::ALL
            .into_iter()
            .map(move |case| (case, self.get(case)))
    }
}

impl Serialize for InflectionResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CaseTag::COUNT))?;
        for (case, form) in self.iter() {
            map.serialize_entry(case.as_str(), form)?;
        }
        map.end()
    }
}
