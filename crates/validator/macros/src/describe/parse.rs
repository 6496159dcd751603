//! Parsing of `#[validate(...)]` field attributes

use syn::meta::ParseNestedMeta;
use syn::punctuated::Punctuated;
use syn::{Attribute, Error, Expr, ExprLit, ExprUnary, Lit, Meta, Token, UnOp};

const SUPPORTED: &str = "required, min, max, pattern, alias";

/// Directive values of one field, kept as the raw strings the runtime
/// parses.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct FieldAttrs {
    pub required: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
    pub pattern: Option<String>,
    pub alias: Option<String>,
}

impl FieldAttrs {
    /// Parses every `#[validate(...)]` attribute of a field.
    ///
    /// Without an explicit `alias`, a `#[serde(rename = "...")]` on the same
    /// field provides it.
    pub(super) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("validate") {
                continue;
            }

            attr.parse_nested_meta(|meta| result.parse_meta(&meta))?;
        }

        if result.alias.is_none() {
            result.alias = serde_rename(attrs);
        }

        Ok(result)
    }

    fn parse_meta(&mut self, meta: &ParseNestedMeta<'_>) -> syn::Result<()> {
        let key = meta
            .path
            .get_ident()
            .map(ToString::to_string)
            .unwrap_or_default();

        let slot = match key.as_str() {
            "required" => &mut self.required,
            "min" => &mut self.min,
            "max" => &mut self.max,
            "pattern" => &mut self.pattern,
            "alias" => &mut self.alias,
            _ => {
                return Err(meta.error(format!(
                    "Unknown validation directive. Supported directives: {SUPPORTED}"
                )));
            }
        };

        if slot.is_some() {
            return Err(meta.error(format!("duplicate `{key}` directive")));
        }

        let value = if meta.input.peek(Token![=]) {
            let expr: Expr = meta.value()?.parse()?;
            if key == "alias" {
                alias_value(&expr)?
            } else {
                directive_value(&expr)?
            }
        } else if key == "required" {
            // Bare `required` is shorthand for `required = "true"`.
            "true".to_owned()
        } else {
            return Err(meta.error(format!("`{key}` needs a value: `{key} = ...`")));
        };

        *slot = Some(value);
        Ok(())
    }
}

/// Renders a literal directive value as the string the runtime reads.
///
/// Strings are taken verbatim; numbers and booleans use their source digits,
/// so `min = 3` and `min = "3"` are the same directive.
fn directive_value(expr: &Expr) -> syn::Result<String> {
    match expr {
        Expr::Lit(ExprLit { lit, .. }) => match lit {
            Lit::Str(s) => Ok(s.value()),
            Lit::Int(i) => Ok(i.base10_digits().to_owned()),
            Lit::Float(f) => Ok(f.base10_digits().to_owned()),
            Lit::Bool(b) => Ok(b.value.to_string()),
            other => Err(Error::new_spanned(
                other,
                "directive values must be string, integer or boolean literals",
            )),
        },
        Expr::Unary(ExprUnary {
            op: UnOp::Neg(_),
            expr: inner,
            ..
        }) => match &**inner {
            Expr::Lit(ExprLit {
                lit: Lit::Int(i), ..
            }) => Ok(format!("-{}", i.base10_digits())),
            other => Err(Error::new_spanned(other, "expected an integer literal")),
        },
        other => Err(Error::new_spanned(
            other,
            "directive values must be literals",
        )),
    }
}

fn alias_value(expr: &Expr) -> syn::Result<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) if !s.value().is_empty() => Ok(s.value()),
        other => Err(Error::new_spanned(
            other,
            "`alias` must be a non-empty string literal",
        )),
    }
}

/// Reads the name a field is decoded from, as declared for serde.
///
/// `rename = "x"` and `rename(deserialize = "x")` are recognized. Anything
/// that does not parse is left for serde to report.
fn serde_rename(attrs: &[Attribute]) -> Option<String> {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("serde"))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
                .ok()
        })
        .flatten()
        .find_map(|meta| match meta {
            Meta::NameValue(nv) if nv.path.is_ident("rename") => string_literal(&nv.value),
            Meta::List(list) if list.path.is_ident("rename") => list
                .parse_args_with(Punctuated::<Meta, Token![,]>::parse_terminated)
                .ok()?
                .into_iter()
                .find_map(|inner| match inner {
                    Meta::NameValue(nv) if nv.path.is_ident("deserialize") => {
                        string_literal(&nv.value)
                    }
                    _ => None,
                }),
            _ => None,
        })
}

fn string_literal(expr: &Expr) -> Option<String> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(s), ..
        }) => Some(s.value()),
        _ => None,
    }
}
