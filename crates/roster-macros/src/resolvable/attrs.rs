//! Attribute parsing for the Resolvable derive macro.
//!
//! Parses the `#[view(...)]` field attributes.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Lit, Meta, Result, Token,
};

/// Field-level attributes from `#[view(...)]`.
#[derive(Debug, Clone)]
pub struct ViewAttr {
    /// Leave this field out of resolution.
    pub skip: bool,
    /// Custom key for this field (default: field name).
    pub rename: Option<String>,
    /// The span for error reporting.
    pub span: Span,
}

impl Default for ViewAttr {
    fn default() -> Self {
        ViewAttr {
            skip: false,
            rename: None,
            span: Span::call_site(),
        }
    }
}

impl Parse for ViewAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = ViewAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) if p.is_ident("skip") => {
                    attr.skip = true;
                    attr.span = p.span();
                }

                Meta::NameValue(nv) if nv.path.is_ident("rename") => {
                    if let syn::Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(s), ..
                    }) = &nv.value
                    {
                        let key = s.value();
                        if key.is_empty() || key.contains('.') {
                            return Err(Error::new(
                                s.span(),
                                "rename must be a non-empty key without '.'",
                            ));
                        }
                        attr.rename = Some(key);
                        attr.span = s.span();
                    } else {
                        return Err(Error::new(
                            nv.value.span(),
                            "rename must be a string literal",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown view attribute. Expected: skip or rename = \"...\"",
                    ));
                }
            }
        }

        if attr.skip && attr.rename.is_some() {
            return Err(Error::new(attr.span, "skip and rename cannot be combined"));
        }

        Ok(attr)
    }
}

/// Extract `#[view(...)]` attributes from a field's attributes.
pub fn parse_view_attrs(attrs: &[Attribute]) -> Result<ViewAttr> {
    for attr in attrs {
        if attr.path().is_ident("view") {
            return attr.parse_args::<ViewAttr>();
        }
    }
    Ok(ViewAttr::default())
}
