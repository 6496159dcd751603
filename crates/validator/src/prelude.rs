//! Prelude module for convenient imports.
//!
//! Provides a single `use envconfig_validator::prelude::*;` import that brings
//! in the validator, its traits and error types, and the derive macro.
//!
//! # Examples
//!
//! ```rust,ignore
//! use envconfig_validator::prelude::*;
//!
//! #[derive(Describe)]
//! pub struct Config {
//!     #[validate(required)]
//!     pub url: String,
//! }
//!
//! StructValidator::new().validate_struct(Some(&config))?;
//! ```

// ============================================================================
// FOUNDATION: Core traits, shapes, errors
// ============================================================================

pub use crate::foundation::{
    ConfigError, Describe, DirectiveCheck, Directives, FieldDescriptor, Reflect, Shape,
    ShapeKind, ValidationError, ValidationErrors, Validator,
};

// ============================================================================
// VALIDATION ENTRY POINTS
// ============================================================================

pub use crate::reflect_scalar;
pub use crate::structural::{StructValidator, validate};

// ============================================================================
// DERIVE-GATED: `#[derive(Describe)]`
// ============================================================================

#[cfg(feature = "derive")]
pub use envconfig_validator_macros::Describe;
