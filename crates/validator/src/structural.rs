//! Recursive struct validation
//!
//! [`StructValidator`] walks a configuration value depth-first in field
//! declaration order, applies the directive checks to every exported field and
//! collects every violation before returning.

use crate::foundation::{
    ConfigError, Describe, FieldDescriptor, Reflect, Shape, ValidationErrors, Validator,
};
use crate::validators::DirectiveSet;

/// Stateless validator for directive-annotated structs.
///
/// One instance can be shared freely between threads; a call never mutates
/// the validator.
///
/// # Examples
///
/// ```rust,ignore
/// use envconfig_validator::{Describe, StructValidator, Validator};
///
/// #[derive(Describe)]
/// pub struct AppConfig {
///     #[validate(required, min = 3)]
///     pub name: String,
/// }
///
/// let config = AppConfig { name: "ab".into() };
/// let err = StructValidator::new().validate_struct(Some(&config)).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "validation failed with 1 error(s): validation error for field 'name': \
///      name minimum length is 3, got 2"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StructValidator;

impl StructValidator {
    /// Creates a validator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Collects the violations of every exported field below `root`.
    ///
    /// This is the walk behind [`Validator::validate_struct`], without the
    /// input-shape checks.
    pub fn violations(&self, root: &dyn Describe) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        self.walk(root, "", &mut errors);
        errors
    }

    fn walk(&self, node: &dyn Describe, prefix: &str, errors: &mut ValidationErrors) {
        for field in node.fields() {
            if !field.exported {
                tracing::trace!(
                    type_name = node.type_name(),
                    field = field.ident,
                    "skipping unexported field"
                );
                continue;
            }
            self.visit(&field, prefix, errors);
        }
    }

    fn visit(&self, field: &FieldDescriptor<'_>, prefix: &str, errors: &mut ValidationErrors) {
        let path = field.path(prefix);
        tracing::trace!(field = %path, shape = %field.value.kind(), "checking field");

        let checks = DirectiveSet::from_directives(&field.directives);
        errors.extend(checks.check_all(&path, &field.value));

        match field.value {
            Shape::Struct(inner) => self.walk(inner, &path, errors),
            Shape::Pointer(Some(target)) => {
                if let Shape::Struct(inner) = target.shape() {
                    self.walk(inner, &path, errors);
                }
            }
            Shape::Pointer(None) => {
                tracing::trace!(field = %path, "nil pointer, not descending");
            }
            Shape::String(_) | Shape::Sequence(_) | Shape::Map(_) | Shape::Scalar => {}
        }
    }
}

impl Validator for StructValidator {
    fn validate_struct(&self, value: Option<&dyn Reflect>) -> Result<(), ConfigError> {
        let Some(value) = value else {
            tracing::debug!("configuration is nil");
            return Err(ConfigError::Nil);
        };

        let shape = match value.shape() {
            Shape::Pointer(None) => {
                tracing::debug!("configuration pointer is nil");
                return Err(ConfigError::NilPointer);
            }
            Shape::Pointer(Some(target)) => target.shape(),
            shape => shape,
        };

        let Shape::Struct(root) = shape else {
            tracing::debug!(found = %shape.kind(), "configuration is not a struct");
            return Err(ConfigError::NotStruct {
                found: shape.kind(),
            });
        };

        let errors = self.violations(root);
        if errors.has_errors() {
            tracing::debug!(
                type_name = root.type_name(),
                violations = errors.len(),
                "configuration failed validation"
            );
            return Err(ConfigError::Invalid(errors));
        }

        Ok(())
    }
}

/// Validates a present value with a default [`StructValidator`].
///
/// # Examples
///
/// ```rust
/// use envconfig_validator::{ConfigError, validate};
///
/// assert!(matches!(validate(&"x"), Err(ConfigError::NotStruct { .. })));
/// ```
pub fn validate<T: Reflect>(value: &T) -> Result<(), ConfigError> {
    StructValidator::new().validate_struct(Some(value))
}
