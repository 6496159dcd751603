//! String length directives
//!
//! `min` and `max` only apply to string-valued fields and measure length in
//! bytes. A bound that parses to zero or less, or does not parse at all,
//! disables its check.

use crate::foundation::{DirectiveCheck, Shape, ValidationError, ValidationResult};
use crate::validators::parse_int;

// ============================================================================
// MIN LENGTH
// ============================================================================

/// Rejects strings shorter than the declared minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MinLength {
    min: i64,
}

impl MinLength {
    /// Creates a check for an already-known bound.
    #[must_use]
    pub fn new(min: i64) -> Self {
        Self { min }
    }

    /// Reads the raw `min` directive.
    #[must_use]
    pub fn from_directive(directive: Option<&str>) -> Self {
        Self::new(directive.map_or(0, |raw| parse_int(raw, 0)))
    }

    #[must_use]
    pub fn min(&self) -> i64 {
        self.min
    }
}

impl DirectiveCheck for MinLength {
    fn check(&self, field: &str, value: &Shape<'_>) -> ValidationResult<()> {
        match value.as_str() {
            Some(s) if self.min > 0 && (s.len() as i64) < self.min => {
                Err(ValidationError::min_length(field, self.min, s.len()))
            }
            _ => Ok(()),
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

/// Rejects strings longer than the declared maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MaxLength {
    max: i64,
}

impl MaxLength {
    /// Creates a check for an already-known bound.
    #[must_use]
    pub fn new(max: i64) -> Self {
        Self { max }
    }

    /// Reads the raw `max` directive.
    #[must_use]
    pub fn from_directive(directive: Option<&str>) -> Self {
        Self::new(directive.map_or(0, |raw| parse_int(raw, 0)))
    }

    #[must_use]
    pub fn max(&self) -> i64 {
        self.max
    }
}

impl DirectiveCheck for MaxLength {
    fn check(&self, field: &str, value: &Shape<'_>) -> ValidationResult<()> {
        match value.as_str() {
            Some(s) if self.max > 0 && (s.len() as i64) > self.max => {
                Err(ValidationError::max_length(field, self.max, s.len()))
            }
            _ => Ok(()),
        }
    }
}
