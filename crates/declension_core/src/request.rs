//! Boundary validation for declension input.
//!
//! Callers validate input here before invoking the service; the service
//! itself accepts any text.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Maximum accepted input length in characters.
pub const MAX_QUERY_CHARS: usize = 128;

/// Validated declension input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclensionQuery {
    text: String,
}

impl DeclensionQuery {
    /// Accepts text with 1..=`MAX_QUERY_CHARS` characters.
    ///
    /// Length is counted in Unicode scalar values on the raw input.
    pub fn parse(text: impl Into<String>) -> Result<Self, QueryError> {
        let text = text.into();
        let len = text.chars().count();
        if len == 0 {
            return Err(QueryError::Empty);
        }
        if len > MAX_QUERY_CHARS {
            return Err(QueryError::TooLong {
                len,
                max: MAX_QUERY_CHARS,
            });
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    Empty,
    TooLong { len: usize, max: usize },
}

impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "text must not be empty"),
            Self::TooLong { len, max } => {
                write!(f, "text is too long: {len} characters, at most {max} allowed")
            }
        }
    }
}

impl Error for QueryError {}
