//! Error types for validation failures
//!
//! Two layers of failure exist:
//!
//! - [`ConfigError`] is what a validation call returns. Three of its variants
//!   reject the input before any field is looked at; the fourth carries the
//!   accumulated field failures.
//! - [`ValidationError`] is one field-level failure and [`ValidationErrors`]
//!   the ordered collection of them.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::ShapeKind;

// ============================================================================
// CONFIG ERROR
// ============================================================================

/// Failure returned by a struct validation call.
///
/// The first three variants are input-shape failures: they are returned as
/// soon as they are detected and no field is inspected. [`ConfigError::Invalid`]
/// carries every field violation found by the walk.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// No value was supplied at all.
    #[error("configuration cannot be nil")]
    Nil,

    /// The value was a pointer-like wrapper holding nothing.
    #[error("configuration pointer cannot be nil")]
    NilPointer,

    /// The value, after one pointer indirection, is not a struct.
    #[error("configuration must be a struct")]
    NotStruct {
        /// Shape that was found instead.
        found: ShapeKind,
    },

    /// One or more fields violated their directives.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl ConfigError {
    /// Returns the field violations, if this is [`ConfigError::Invalid`].
    #[must_use]
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns true for the failures that reject the input before the walk.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single field-level violation.
///
/// `field` is always the full dotted path from the validation root,
/// e.g. `database.host`.
///
/// # Examples
///
/// ```rust
/// use envconfig_validator::ValidationError;
///
/// let error = ValidationError::new("test_field", "test message");
/// assert_eq!(
///     error.to_string(),
///     "validation error for field 'test_field': test message"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: Cow<'static, str>,

    /// Human-readable description of the failure.
    pub message: Cow<'static, str>,
}

impl ValidationError {
    /// Creates a violation for a field path with a message.
    pub fn new(field: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Creates a "required" violation.
    pub fn required(field: &str) -> Self {
        Self::new(field.to_owned(), format!("{field} is required"))
    }

    /// Creates a "minimum length" violation.
    pub fn min_length(field: &str, min: i64, actual: usize) -> Self {
        Self::new(
            field.to_owned(),
            format!("{field} minimum length is {min}, got {actual}"),
        )
    }

    /// Creates a "maximum length" violation.
    pub fn max_length(field: &str, max: i64, actual: usize) -> Self {
        Self::new(
            field.to_owned(),
            format!("{field} maximum length is {max}, got {actual}"),
        )
    }

    /// Creates a pattern mismatch violation.
    pub fn pattern_mismatch(field: &str, pattern: &str) -> Self {
        Self::new(
            field.to_owned(),
            format!("{field} does not match required pattern: {pattern}"),
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "validation error for field '{}': {}",
            self.field, self.message
        )
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Ordered collection of field violations, in discovery order.
///
/// # Examples
///
/// ```rust
/// use envconfig_validator::{ValidationError, ValidationErrors};
///
/// let mut errors = ValidationErrors::new();
/// assert_eq!(errors.to_string(), "no validation errors");
///
/// errors.add(ValidationError::new("field1", "error1"));
/// assert_eq!(
///     errors.to_string(),
///     "validation failed with 1 error(s): validation error for field 'field1': error1"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Adds multiple errors to the collection.
    pub fn extend(&mut self, errors: impl IntoIterator<Item = ValidationError>) {
        self.errors.extend(errors);
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Iterates over the errors in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.errors.iter()
    }

    /// Returns `Ok(ok_value)` when empty, otherwise `Err(self)`.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.errors.is_empty() {
            return f.write_str("no validation errors");
        }

        write!(f, "validation failed with {} error(s): ", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
