//! The `required` directive

use crate::foundation::{DirectiveCheck, REQUIRED_FLAG, Shape, ValidationError, ValidationResult};

/// Rejects empty values when the directive is exactly `"true"`.
///
/// Emptiness follows [`Shape::is_empty`]: numbers, booleans and structs are
/// always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Required {
    enabled: bool,
}

impl Required {
    /// Reads the raw `required` directive.
    #[must_use]
    pub fn from_directive(directive: Option<&str>) -> Self {
        Self {
            enabled: directive == Some(REQUIRED_FLAG),
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl DirectiveCheck for Required {
    fn check(&self, field: &str, value: &Shape<'_>) -> ValidationResult<()> {
        if self.enabled && value.is_empty() {
            Err(ValidationError::required(field))
        } else {
            Ok(())
        }
    }
}
