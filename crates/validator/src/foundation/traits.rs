//! Core traits for the validation system

use crate::foundation::{ConfigError, Reflect, Shape, ValidationResult};

/// Validates a whole configuration value.
///
/// `None` stands for the absence of any value and is rejected before the
/// value's shape is looked at.
///
/// # Examples
///
/// ```rust
/// use envconfig_validator::{ConfigError, StructValidator, Validator};
///
/// let validator = StructValidator::new();
/// assert_eq!(validator.validate_struct(None), Err(ConfigError::Nil));
/// ```
pub trait Validator {
    /// Validates `value` and every accessible field below it.
    fn validate_struct(&self, value: Option<&dyn Reflect>) -> Result<(), ConfigError>;
}

/// A single directive check applied to one field value.
///
/// Checks never fail on their own configuration: a directive they cannot
/// interpret disables them.
pub trait DirectiveCheck {
    /// Checks the value of the field at path `field`.
    fn check(&self, field: &str, value: &Shape<'_>) -> ValidationResult<()>;
}
