//! Input validation for derive macros

use syn::punctuated::Punctuated;
use syn::token::Comma;
use syn::{Data, DeriveInput, Error, Field, Fields};

/// Returns the named fields of a struct.
///
/// Unit structs have no fields and yield an empty list.
///
/// # Errors
///
/// Returns an error spanned at the type name if:
/// - Input is an enum or a union
/// - Struct has unnamed fields (tuple struct)
pub fn require_named_struct(input: &DeriveInput) -> syn::Result<Punctuated<Field, Comma>> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields.named.clone()),
            Fields::Unit => Ok(Punctuated::new()),
            Fields::Unnamed(_) => Err(Error::new_spanned(
                &input.ident,
                "`Describe` requires named fields; tuple structs are not supported",
            )),
        },
        Data::Enum(_) => Err(Error::new_spanned(
            &input.ident,
            "`Describe` can only be derived for structs; use `reflect_scalar!` for leaf enums",
        )),
        Data::Union(_) => Err(Error::new_spanned(
            &input.ident,
            "`Describe` cannot be derived for unions",
        )),
    }
}
