//! Value shapes seen by the struct walk
//!
//! A configuration value is never inspected through its concrete type.
//! [`Reflect`] turns any supported value into a [`Shape`], a small closed
//! union the walk switches on.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::foundation::Describe;

// ============================================================================
// SHAPE
// ============================================================================

/// The shape of a single value, borrowed from the value itself.
#[derive(Clone, Copy)]
pub enum Shape<'a> {
    /// Textual value.
    String(&'a str),
    /// Optional indirection. `None` is the empty pointer.
    Pointer(Option<&'a dyn Reflect>),
    /// A value with its own field descriptors.
    Struct(&'a dyn Describe),
    /// Slices, arrays and vectors, with their length.
    Sequence(usize),
    /// Maps and sets, with their length.
    Map(usize),
    /// Numbers, booleans, chars and any other leaf value.
    Scalar,
}

impl<'a> Shape<'a> {
    /// Returns the payload-free discriminant.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::String(_) => ShapeKind::String,
            Shape::Pointer(_) => ShapeKind::Pointer,
            Shape::Struct(_) => ShapeKind::Struct,
            Shape::Sequence(_) => ShapeKind::Sequence,
            Shape::Map(_) => ShapeKind::Map,
            Shape::Scalar => ShapeKind::Scalar,
        }
    }

    /// Applies the emptiness rule used by the `required` directive.
    ///
    /// Only zero-length strings, empty pointers and zero-length sequences or
    /// maps are empty. Structs and scalars never are, even at their zero
    /// value: `false` and `0` count as present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match *self {
            Shape::String(s) => s.is_empty(),
            Shape::Pointer(target) => target.is_none(),
            Shape::Sequence(len) | Shape::Map(len) => len == 0,
            Shape::Struct(_) | Shape::Scalar => false,
        }
    }

    /// Returns the text of a string-shaped value.
    #[must_use]
    pub fn as_str(&self) -> Option<&'a str> {
        match *self {
            Shape::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the struct, following at most one pointer.
    ///
    /// `None` for empty pointers and for anything that is not a struct.
    #[must_use]
    pub fn as_struct(&self) -> Option<&'a dyn Describe> {
        match *self {
            Shape::Struct(inner) => Some(inner),
            Shape::Pointer(Some(target)) => match target.shape() {
                Shape::Struct(inner) => Some(inner),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::String(s) => f.debug_tuple("String").field(s).finish(),
            Shape::Pointer(None) => f.write_str("Pointer(nil)"),
            Shape::Pointer(Some(target)) => {
                f.debug_tuple("Pointer").field(&target.shape()).finish()
            }
            Shape::Struct(inner) => f.debug_tuple("Struct").field(&inner.type_name()).finish(),
            Shape::Sequence(len) => f.debug_tuple("Sequence").field(len).finish(),
            Shape::Map(len) => f.debug_tuple("Map").field(len).finish(),
            Shape::Scalar => f.write_str("Scalar"),
        }
    }
}

// ============================================================================
// SHAPE KIND
// ============================================================================

/// Discriminant of a [`Shape`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "lowercase"))]
pub enum ShapeKind {
    String,
    Pointer,
    Struct,
    Sequence,
    Map,
    Scalar,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShapeKind::String => "string",
            ShapeKind::Pointer => "pointer",
            ShapeKind::Struct => "struct",
            ShapeKind::Sequence => "sequence",
            ShapeKind::Map => "map",
            ShapeKind::Scalar => "scalar",
        })
    }
}

// ============================================================================
// REFLECT
// ============================================================================

/// Exposes the [`Shape`] of a value.
///
/// Implemented for the std types a configuration struct usually holds and
/// by `#[derive(Describe)]`. Use [`reflect_scalar!`](crate::reflect_scalar)
/// for custom leaf types such as enums.
pub trait Reflect {
    /// Returns the shape of this value.
    fn shape(&self) -> Shape<'_>;
}

impl Reflect for str {
    fn shape(&self) -> Shape<'_> {
        Shape::String(self)
    }
}

impl Reflect for String {
    fn shape(&self) -> Shape<'_> {
        Shape::String(self)
    }
}

impl Reflect for Cow<'_, str> {
    fn shape(&self) -> Shape<'_> {
        Shape::String(self)
    }
}

impl<T: Reflect + ?Sized> Reflect for &T {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Reflect> Reflect for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Pointer(self.as_ref().map(|value| value as &dyn Reflect))
    }
}

// Owned `str` and slices behind a smart pointer are strings and sequences,
// not pointers: they can never be nil.
macro_rules! impl_reflect_pointer {
    ($($ptr:ident),* $(,)?) => {
        $(
            impl<T: Reflect> Reflect for $ptr<T> {
                fn shape(&self) -> Shape<'_> {
                    Shape::Pointer(Some(&**self as &dyn Reflect))
                }
            }

            impl Reflect for $ptr<str> {
                fn shape(&self) -> Shape<'_> {
                    Shape::String(self)
                }
            }

            impl<T> Reflect for $ptr<[T]> {
                fn shape(&self) -> Shape<'_> {
                    Shape::Sequence(self.len())
                }
            }
        )*
    };
}

impl_reflect_pointer!(Box, Rc, Arc);

impl<T> Reflect for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.len())
    }
}

impl<T, const N: usize> Reflect for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(N)
    }
}

impl<T> Reflect for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.len())
    }
}

impl<T> Reflect for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Sequence(self.len())
    }
}

impl<K, V, S> Reflect for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(self.len())
    }
}

impl<K, V> Reflect for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(self.len())
    }
}

impl<T, S> Reflect for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(self.len())
    }
}

impl<T> Reflect for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Map(self.len())
    }
}

crate::reflect_scalar!(
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    (),
    std::time::Duration,
    std::path::PathBuf,
    std::net::IpAddr,
    std::net::Ipv4Addr,
    std::net::Ipv6Addr,
    std::net::SocketAddr,
);
