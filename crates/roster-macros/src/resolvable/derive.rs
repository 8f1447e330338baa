//! Implementation of the `#[derive(Resolvable)]` macro.
//!
//! This macro generates an implementation of the `Resolvable` trait and
//! key constants for type-safe column and filter definitions.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_quote, spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::parse_view_attrs;

/// Main implementation of the Resolvable derive macro.
pub fn resolvable_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    // Ensure we have a struct with named fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Resolvable can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Resolvable can only be derived for structs",
            ))
        }
    };

    let mut field_idents = Vec::new();
    let mut field_keys: Vec<String> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let view_attrs = parse_view_attrs(&field.attrs)?;
        if view_attrs.skip {
            continue;
        }

        let key = view_attrs
            .rename
            .unwrap_or_else(|| field_name.to_string().trim_start_matches("r#").to_string());

        if field_keys.contains(&key) {
            return Err(Error::new(
                field.span(),
                format!("duplicate resolvable key: '{}'", key),
            ));
        }

        let const_name = format_ident!("{}", to_screaming_snake_case(&key));
        field_constants.push(quote! {
            /// Key path constant for columns, search keys and filters.
            pub const #const_name: &'static str = #key;
        });

        field_idents.push(field_name.clone());
        field_keys.push(key);
    }

    // Every type parameter must itself resolve for field delegation to work.
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::roster_seeker::Resolvable));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::roster_seeker::Resolvable for #struct_name #ty_generics #where_clause {
            fn resolve_segments(&self, segments: &[&str]) -> ::roster_seeker::Resolved {
                match segments.split_first() {
                    ::core::option::Option::None => ::roster_seeker::Resolved::PlainObject(::std::vec![
                        #(
                            ::roster_seeker::Resolvable::resolve_segments(&self.#field_idents, &[])
                                .into_text()
                        ),*
                    ]),
                    ::core::option::Option::Some((head, _rest)) => match *head {
                        #(
                            #field_keys => ::roster_seeker::Resolvable::resolve_segments(
                                &self.#field_idents,
                                _rest,
                            ),
                        )*
                        _ => ::roster_seeker::Resolved::Missing,
                    },
                }
            }
        }
    };

    Ok(expanded)
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == ' ' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = c.is_alphanumeric();
        }
    }

    result
}
