//! Code generation for the Describe derive
//!
//! Each named field becomes one `FieldDescriptor` literal. The struct also
//! reflects itself as `Shape::Struct`, so it can be nested inside other
//! described structs and passed to `validate` directly.

use super::parse::FieldAttrs;
use crate::support::validation;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{DeriveInput, Error, Ident, Type, Visibility, WherePredicate, parse_quote};

/// Generate the `Describe` and `Reflect` impls for a struct.
///
/// # Errors
///
/// Returns an error if:
/// - Input is not a struct with named fields (unit structs are accepted)
/// - A `#[validate(...)]` attribute is malformed
pub(super) fn generate_describe(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let type_name = name.to_string();

    let fields = validation::require_named_struct(input)?;

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut reflected: Vec<&Type> = Vec::new();

    for field in &fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new_spanned(field, "expected a named field"))?;
        let attrs = FieldAttrs::from_attributes(&field.attrs)?;
        let exported = matches!(field.vis, Visibility::Public(_));

        if exported {
            reflected.push(&field.ty);
        }

        descriptors.push(generate_descriptor(ident, exported, &attrs));
    }

    let mut generics = input.generics.clone();
    if generics.type_params().next().is_some() {
        let predicates: Vec<WherePredicate> = reflected
            .iter()
            .map(|ty| parse_quote!(#ty: ::envconfig_validator::Reflect))
            .collect();
        generics.make_where_clause().predicates.extend(predicates);
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::envconfig_validator::Describe for #name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn fields(&self) -> ::std::vec::Vec<::envconfig_validator::FieldDescriptor<'_>> {
                ::std::vec![#(#descriptors),*]
            }
        }

        #[automatically_derived]
        impl #impl_generics ::envconfig_validator::Reflect for #name #ty_generics #where_clause {
            fn shape(&self) -> ::envconfig_validator::Shape<'_> {
                ::envconfig_validator::Shape::Struct(self)
            }
        }
    })
}

/// Builds the `FieldDescriptor` expression for one field.
///
/// Private fields are described but never read, so their types need no
/// `Reflect` impl.
fn generate_descriptor(ident: &Ident, exported: bool, attrs: &FieldAttrs) -> TokenStream {
    let ident_str = ident.unraw().to_string();

    let alias = optional_str(attrs.alias.as_deref());
    let required = optional_str(attrs.required.as_deref());
    let min = optional_str(attrs.min.as_deref());
    let max = optional_str(attrs.max.as_deref());
    let pattern = optional_str(attrs.pattern.as_deref());

    let value = if exported {
        quote! { ::envconfig_validator::Reflect::shape(&self.#ident) }
    } else {
        quote! { ::envconfig_validator::Shape::Scalar }
    };

    quote! {
        ::envconfig_validator::FieldDescriptor {
            ident: #ident_str,
            alias: #alias,
            exported: #exported,
            directives: ::envconfig_validator::Directives {
                required: #required,
                min: #min,
                max: #max,
                pattern: #pattern,
            },
            value: #value,
        }
    }
}

fn optional_str(value: Option<&str>) -> TokenStream {
    match value {
        Some(s) => quote! { ::core::option::Option::Some(#s) },
        None => quote! { ::core::option::Option::None },
    }
}
