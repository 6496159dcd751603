//! Core validation types and traits
//!
//! This module contains the building blocks the struct walk is made of:
//!
//! - **Shapes**: [`Shape`], [`ShapeKind`] and the [`Reflect`] trait
//! - **Descriptors**: [`Describe`], [`FieldDescriptor`], [`Directives`]
//! - **Traits**: [`Validator`], [`DirectiveCheck`]
//! - **Errors**: [`ConfigError`], [`ValidationError`], [`ValidationErrors`]

pub mod descriptor;
pub mod error;
pub mod shape;
pub mod traits;

pub use descriptor::{Describe, Directives, FieldDescriptor, REQUIRED_FLAG};
pub use error::{ConfigError, ValidationError, ValidationErrors};
pub use shape::{Reflect, Shape, ShapeKind};
pub use traits::{DirectiveCheck, Validator};

/// A validation result using a single violation.
pub type ValidationResult<T> = Result<T, ValidationError>;
