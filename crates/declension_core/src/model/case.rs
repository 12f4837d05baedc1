//! Grammatical case identifiers.
//!
//! # Responsibility
//! - Define the closed set of Russian cases covered by declension.
//! - Map each case to its stable wire id and human-readable label.
//!
//! # Invariants
//! - `CaseTag::ALL` has exactly six entries in fixed order.
//! - Wire ids are lowercase and never change.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Russian grammatical case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CaseTag {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    /// Instrumental case, labelled `ablt` on the wire.
    Instrumental,
    /// Prepositional case, labelled `loct` on the wire.
    Prepositional,
}

/// Wire id for nominative case.
pub const CASE_TAG_NOMINATIVE: &str = "nomn";
/// Wire id for genitive case.
pub const CASE_TAG_GENITIVE: &str = "gent";
/// Wire id for dative case.
pub const CASE_TAG_DATIVE: &str = "datv";
/// Wire id for accusative case.
pub const CASE_TAG_ACCUSATIVE: &str = "accs";
/// Wire id for instrumental case.
pub const CASE_TAG_INSTRUMENTAL: &str = "ablt";
/// Wire id for prepositional case.
pub const CASE_TAG_PREPOSITIONAL: &str = "loct";

impl CaseTag {
    /// Number of supported cases.
    pub const COUNT: usize = 6;

    /// All cases in canonical declension order.
    pub const ALL: [CaseTag; CaseTag::COUNT] = [
        CaseTag::Nominative,
        CaseTag::Genitive,
        CaseTag::Dative,
        CaseTag::Accusative,
        CaseTag::Instrumental,
        CaseTag::Prepositional,
    ];

    /// Stable wire id (`nomn`, `gent`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Nominative => CASE_TAG_NOMINATIVE,
            Self::Genitive => CASE_TAG_GENITIVE,
            Self::Dative => CASE_TAG_DATIVE,
            Self::Accusative => CASE_TAG_ACCUSATIVE,
            Self::Instrumental => CASE_TAG_INSTRUMENTAL,
            Self::Prepositional => CASE_TAG_PREPOSITIONAL,
        }
    }

    /// English case name used by localization consumers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Nominative => "Nominative",
            Self::Genitive => "Genitive",
            Self::Dative => "Dative",
            Self::Accusative => "Accusative",
            Self::Instrumental => "Instrumental",
            Self::Prepositional => "Prepositional",
        }
    }

    /// Position of this case inside `CaseTag::ALL`.
    pub fn index(self) -> usize {
        match self {
            Self::Nominative => 0,
            Self::Genitive => 1,
            Self::Dative => 2,
            Self::Accusative => 3,
            Self::Instrumental => 4,
            Self::Prepositional => 5,
        }
    }
}

impl Display for CaseTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one case tag from its wire id.
///
/// Matching is exact: surrounding whitespace is trimmed, but case is not folded.
pub fn parse_case_tag(value: &str) -> Result<CaseTag, CaseTagError> {
    let normalized = value.trim();
    if normalized.is_empty() {
        return Err(CaseTagError::EmptyTag);
    }

    match normalized {
        CASE_TAG_NOMINATIVE => Ok(CaseTag::Nominative),
        CASE_TAG_GENITIVE => Ok(CaseTag::Genitive),
        CASE_TAG_DATIVE => Ok(CaseTag::Dative),
        CASE_TAG_ACCUSATIVE => Ok(CaseTag::Accusative),
        CASE_TAG_INSTRUMENTAL => Ok(CaseTag::Instrumental),
        CASE_TAG_PREPOSITIONAL => Ok(CaseTag::Prepositional),
        other => Err(CaseTagError::UnsupportedTag(other.to_string())),
    }
}

/// Case tag parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseTagError {
    EmptyTag,
    UnsupportedTag(String),
}

impl Display for CaseTagError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTag => write!(f, "case tag must not be empty"),
            Self::UnsupportedTag(value) => write!(f, "case tag is unsupported: {value}"),
        }
    }
}

impl Error for CaseTagError {}
