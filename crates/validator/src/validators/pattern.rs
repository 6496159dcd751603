//! The `pattern` directive
//!
//! Patterns are referred to by id. Unknown ids match everything.

use crate::foundation::{DirectiveCheck, Shape, ValidationError, ValidationResult};

/// Id of the ASCII letters-and-digits pattern.
pub const ALPHANUMERIC: &str = "alphanumeric";

/// Returns true when every character is an ASCII letter or digit.
///
/// The empty string matches.
#[must_use]
pub fn is_alphanumeric(input: &str) -> bool {
    input.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Matches `input` against the pattern named `pattern`.
///
/// Only [`ALPHANUMERIC`] is recognized; any other id returns `true`.
#[must_use]
pub fn matches_pattern(input: &str, pattern: &str) -> bool {
    match pattern {
        ALPHANUMERIC => is_alphanumeric(input),
        _ => true,
    }
}

/// Rejects strings that do not match the named pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pattern<'a> {
    id: Option<&'a str>,
}

impl<'a> Pattern<'a> {
    /// Reads the raw `pattern` directive.
    #[must_use]
    pub fn from_directive(directive: Option<&'a str>) -> Self {
        Self {
            id: directive.filter(|id| !id.is_empty()),
        }
    }

    #[must_use]
    pub fn id(&self) -> Option<&'a str> {
        self.id
    }
}

impl DirectiveCheck for Pattern<'_> {
    fn check(&self, field: &str, value: &Shape<'_>) -> ValidationResult<()> {
        match (self.id, value.as_str()) {
            (Some(id), Some(s)) if !matches_pattern(s, id) => {
                Err(ValidationError::pattern_mismatch(field, id))
            }
            _ => Ok(()),
        }
    }
}
