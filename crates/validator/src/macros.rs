//! Macros for declaring shapes with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`reflect_scalar!`]: mark leaf types (enums, newtypes) as scalar values
//!
//! # Examples
//!
//! ```rust
//! use envconfig_validator::{Reflect, ShapeKind, reflect_scalar};
//!
//! pub enum LogLevel {
//!     Info,
//!     Debug,
//! }
//!
//! reflect_scalar!(LogLevel);
//!
//! assert_eq!(LogLevel::Info.shape().kind(), ShapeKind::Scalar);
//! ```

// ============================================================================
// REFLECT SCALAR MACRO
// ============================================================================

/// Implements [`Reflect`](crate::Reflect) for leaf types.
///
/// Scalar values are never empty and are never descended into, so a
/// `required` directive on such a field always passes.
///
/// ```rust
/// use envconfig_validator::reflect_scalar;
///
/// pub struct Port(u16);
/// pub struct Timeout(u64);
///
/// reflect_scalar!(Port, Timeout);
/// ```
#[macro_export]
macro_rules! reflect_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Reflect for $ty {
                #[inline]
                fn shape(&self) -> $crate::Shape<'_> {
                    $crate::Shape::Scalar
                }
            }
        )+
    };
}
