//! Directive checks
//!
//! One check per directive, each built from the raw directive value:
//!
//! - [`Required`]: `required = "true"` rejects empty values
//! - [`MinLength`] / [`MaxLength`]: string length bounds
//! - [`Pattern`]: named pattern id, `alphanumeric` being the only known one
//!
//! [`DirectiveSet`] bundles the four in the order the walk applies them.

mod length;
mod parse;
mod pattern;
mod required;

pub use length::{MaxLength, MinLength};
pub use parse::parse_int;
pub use pattern::{ALPHANUMERIC, Pattern, is_alphanumeric, matches_pattern};
pub use required::Required;

use crate::foundation::{DirectiveCheck, Directives, Shape, ValidationError};

/// The four directive checks of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DirectiveSet {
    pub required: Required,
    pub min: MinLength,
    pub max: MaxLength,
    pub pattern: Pattern<'static>,
}

impl DirectiveSet {
    /// Interprets raw directives.
    #[must_use]
    pub fn from_directives(directives: &Directives) -> Self {
        Self {
            required: Required::from_directive(directives.required),
            min: MinLength::from_directive(directives.min),
            max: MaxLength::from_directive(directives.max),
            pattern: Pattern::from_directive(directives.pattern),
        }
    }

    /// Runs required, min, max and pattern in that order, collecting every
    /// failure.
    pub fn check_all(&self, field: &str, value: &Shape<'_>) -> Vec<ValidationError> {
        let checks: [&dyn DirectiveCheck; 4] =
            [&self.required, &self.min, &self.max, &self.pattern];
        checks
            .iter()
            .filter_map(|check| check.check(field, value).err())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_field_can_fail_several_checks() {
        let directives = Directives::new().min("5").pattern("alphanumeric");
        let errors =
            DirectiveSet::from_directives(&directives).check_all("code", &Shape::String("a-b"));

        let messages: Vec<&str> = errors.iter().map(|e| &*e.message).collect();
        assert_eq!(
            messages,
            [
                "code minimum length is 5, got 3",
                "code does not match required pattern: alphanumeric",
            ]
        );
    }

    #[test]
    fn required_comes_before_length() {
        let directives = Directives::new().required("true").min("2").max("5");
        let errors =
            DirectiveSet::from_directives(&directives).check_all("combo", &Shape::String(""));

        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].message, "combo is required");
        assert_eq!(errors[1].message, "combo minimum length is 2, got 0");
    }

    #[test]
    fn no_directives_never_fail() {
        let set = DirectiveSet::from_directives(&Directives::new());
        assert!(set.check_all("any", &Shape::String("")).is_empty());
        assert!(set.check_all("any", &Shape::Pointer(None)).is_empty());
    }
}
