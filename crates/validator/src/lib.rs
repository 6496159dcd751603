//! # envconfig-validator
//!
//! Declarative struct-field validation for configuration objects.
//!
//! Fields carry directives (`required`, `min`, `max`, `pattern`); the
//! [`StructValidator`] walks the value recursively and reports every
//! violation at once instead of stopping at the first.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use envconfig_validator::prelude::*;
//!
//! #[derive(Describe)]
//! pub struct DatabaseConfig {
//!     #[validate(required, alias = "db_host")]
//!     pub host: String,
//!     #[validate(min = 8, pattern = "alphanumeric")]
//!     pub password: String,
//! }
//!
//! #[derive(Describe)]
//! pub struct AppConfig {
//!     #[validate(required, max = 32)]
//!     pub name: String,
//!     pub database: DatabaseConfig,
//!     pub replica: Option<DatabaseConfig>,
//! }
//!
//! match StructValidator::new().validate_struct(Some(&config)) {
//!     Ok(()) => {}
//!     Err(ConfigError::Invalid(errors)) => {
//!         for error in &errors {
//!             eprintln!("{}: {}", error.field, error.message); // e.g. "database.db_host"
//!         }
//!     }
//!     Err(other) => return Err(other.into()),
//! }
//! ```
//!
//! ## Directives
//!
//! - **`required`**: only the value `"true"` enables it; empty strings, `None`,
//!   empty collections fail. Numbers, booleans and structs are never empty.
//! - **`min` / `max`**: byte-length bounds on string fields. Bounds that do not
//!   parse, or parse to zero or less, disable the check.
//! - **`pattern`**: `"alphanumeric"` accepts ASCII letters and digits only.
//!   Unknown pattern ids match everything.
//!
//! ## Field names
//!
//! Violations are reported under the full dotted path from the root. Each
//! segment is the field's alias (`#[validate(alias = "...")]`, falling back to
//! `#[serde(rename = "...")]`) or its lowercased name.
//!
//! ## Feature flags
//!
//! - `derive` (default): `#[derive(Describe)]`
//! - `serde` (default): `Serialize` for validation reports

pub mod foundation;
mod macros;
pub mod prelude;
mod structural;
pub mod validators;

pub use foundation::{
    ConfigError, Describe, DirectiveCheck, Directives, FieldDescriptor, Reflect, Shape,
    ShapeKind, ValidationError, ValidationErrors, ValidationResult, Validator,
};
pub use structural::{StructValidator, validate};

#[cfg(feature = "derive")]
pub use envconfig_validator_macros::Describe;
