//! Field descriptors
//!
//! A [`Describe`] implementation enumerates the fields of a struct together
//! with their directives and current values. `#[derive(Describe)]` generates
//! one at compile time; it can also be written by hand.

use std::borrow::Cow;

use crate::foundation::Shape;

/// Directive value that switches the `required` check on.
pub const REQUIRED_FLAG: &str = "true";

// ============================================================================
// DESCRIBE
// ============================================================================

/// Provides the field descriptors of a struct value.
///
/// # Examples
///
/// ```rust
/// use envconfig_validator::{Describe, Directives, FieldDescriptor, Reflect, Shape};
///
/// struct Server {
///     host: String,
/// }
///
/// impl Describe for Server {
///     fn type_name(&self) -> &'static str {
///         "Server"
///     }
///
///     fn fields(&self) -> Vec<FieldDescriptor<'_>> {
///         vec![FieldDescriptor::new("host", self.host.shape())
///             .with_directives(Directives::new().required("true"))]
///     }
/// }
///
/// impl Reflect for Server {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Struct(self)
///     }
/// }
/// ```
pub trait Describe {
    /// Name of the described type, for diagnostics.
    fn type_name(&self) -> &'static str;

    /// Field descriptors in declaration order.
    fn fields(&self) -> Vec<FieldDescriptor<'_>>;
}

// ============================================================================
// DIRECTIVES
// ============================================================================

/// Raw directive values declared on a field.
///
/// Values are kept exactly as declared; interpretation (and its leniency)
/// belongs to the checks in [`validators`](crate::validators).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directives {
    /// `required`: only the literal `"true"` switches the check on.
    pub required: Option<&'static str>,
    /// `min`: minimum string length.
    pub min: Option<&'static str>,
    /// `max`: maximum string length.
    pub max: Option<&'static str>,
    /// `pattern`: named pattern id.
    pub pattern: Option<&'static str>,
}

impl Directives {
    /// No directives at all.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            required: None,
            min: None,
            max: None,
            pattern: None,
        }
    }

    #[must_use]
    pub const fn required(mut self, value: &'static str) -> Self {
        self.required = Some(value);
        self
    }

    #[must_use]
    pub const fn min(mut self, value: &'static str) -> Self {
        self.min = Some(value);
        self
    }

    #[must_use]
    pub const fn max(mut self, value: &'static str) -> Self {
        self.max = Some(value);
        self
    }

    #[must_use]
    pub const fn pattern(mut self, value: &'static str) -> Self {
        self.pattern = Some(value);
        self
    }

    /// Returns true when `required` is literally `"true"`.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required == Some(REQUIRED_FLAG)
    }

    /// Returns true when no directive is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }
}

// ============================================================================
// FIELD DESCRIPTOR
// ============================================================================

/// Metadata and current value of one struct field.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor<'a> {
    /// Structural field name, without any raw-identifier prefix.
    pub ident: &'static str,
    /// Declared display name, overriding the structural one.
    pub alias: Option<&'static str>,
    /// Only exported fields take part in validation.
    pub exported: bool,
    /// Declared directives.
    pub directives: Directives,
    /// Current value.
    pub value: Shape<'a>,
}

impl<'a> FieldDescriptor<'a> {
    /// Creates an exported field without directives or alias.
    #[must_use]
    pub fn new(ident: &'static str, value: Shape<'a>) -> Self {
        Self {
            ident,
            alias: None,
            exported: true,
            directives: Directives::new(),
            value,
        }
    }

    #[must_use]
    pub fn with_alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    #[must_use]
    pub fn with_directives(mut self, directives: Directives) -> Self {
        self.directives = directives;
        self
    }

    /// Marks the field as not accessible from outside its module.
    #[must_use]
    pub fn unexported(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Logical name: the alias if declared, else the lowercased ident.
    #[must_use]
    pub fn name(&self) -> Cow<'static, str> {
        match self.alias {
            Some(alias) if !alias.is_empty() => Cow::Borrowed(alias),
            _ => Cow::Owned(self.ident.to_ascii_lowercase()),
        }
    }

    /// Full dotted path of this field below `prefix`.
    #[must_use]
    pub fn path(&self, prefix: &str) -> String {
        let name = self.name();
        if prefix.is_empty() {
            name.into_owned()
        } else {
            format!("{prefix}.{name}")
        }
    }
}
