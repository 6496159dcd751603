//! # envconfig-validator macros
//!
//! Derive support for `envconfig-validator`.
//!
//! ## Derive Macros
//!
//! | Macro | Description |
//! |-------|-------------|
//! | [`Describe`](derive@Describe) | Implements `Describe` and `Reflect` for a config struct |
//!
//! ## Examples
//!
//! ```ignore
//! use envconfig_validator::{Describe, validate};
//!
//! #[derive(Describe)]
//! pub struct DatabaseConfig {
//!     #[validate(required, pattern = "alphanumeric")]
//!     pub name: String,
//!
//!     #[validate(min = 8, max = 64)]
//!     pub password: String,
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod describe;
mod support;

/// Derive macro for the `Describe` trait.
///
/// Also implements `Reflect` for the struct, reporting it as a struct shape,
/// so derived types nest inside each other and validate directly.
///
/// # Attributes
///
/// ## Field attributes (`#[validate(...)]`)
///
/// - `required` - Field must be non-empty (shorthand for `required = "true"`)
/// - `required = ...` - Enabled only when the value is exactly `"true"`
/// - `min = ...` - Minimum string length in bytes; zero or less disables it
/// - `max = ...` - Maximum string length in bytes; zero or less disables it
/// - `pattern = "..."` - Named pattern; `"alphanumeric"` is the one known
/// - `alias = "..."` - Name used in error messages and paths
///
/// Values may be string, integer or boolean literals and are kept as
/// written. Without `alias`, `#[serde(rename = "...")]` on the field is used.
///
/// Only `pub` fields are checked. Private fields are described as
/// unexported and skipped at validation time.
///
/// # Example
///
/// ```ignore
/// #[derive(Describe)]
/// pub struct ServerConfig {
///     #[validate(required, alias = "listen_host")]
///     pub host: String,
///
///     #[validate(required)]
///     pub tls: Option<TlsConfig>,
///
///     // never validated
///     #[validate(required)]
///     scratch: String,
/// }
/// ```
#[proc_macro_derive(Describe, attributes(validate))]
pub fn derive_describe(input: TokenStream) -> TokenStream {
    describe::derive(input)
}
