//! KeyOf derive macro implementation
//!
//! This module contains the implementation of the KeyOf derive macro, which
//! is used to generate a key union and keyed field access for a struct.

use darling::{ast, FromDeriveInput, FromField};
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, DeriveInput};

use crate::utils;

/// Receiver for the struct that derives KeyOf
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(key_of), supports(struct_named))]
pub struct KeyOfReceiver {
    /// The struct identifier
    ident: syn::Ident,
    /// Visibility of the generated key enum
    vis: syn::Visibility,
    /// Name of the generated key enum, `<Struct>Key` by default
    #[darling(default)]
    name: Option<syn::Ident>,
    /// The struct data with parsed fields
    data: ast::Data<(), KeyOfFieldReceiver>,
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
#[darling(attributes(key_of))]
pub struct KeyOfFieldReceiver {
    /// The field identifier
    ident: Option<syn::Ident>,
    /// Key spelling, the field name by default
    #[darling(default)]
    rename: Option<String>,
    /// Leave the field out of the key union
    #[darling(default)]
    skip: bool,
}

/// Process the KeyOf derive macro
pub fn process_derive_key_of(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    // Parse with darling
    let receiver = match KeyOfReceiver::from_derive_input(&input) {
        Ok(receiver) => receiver,
        Err(err) => return err.write_errors().into(),
    };

    // Extract the fields
    let ast::Data::Struct(fields) = &receiver.data else {
        unreachable!("Darling ensures this is a struct")
    };

    let expanded = generate_key_of_impl(&receiver, fields);

    // Convert back to proc_macro::TokenStream
    TokenStream::from(expanded)
}

/// Generate the key enum and the KeyOf implementation
fn generate_key_of_impl(
    receiver: &KeyOfReceiver,
    fields: &ast::Fields<KeyOfFieldReceiver>,
) -> proc_macro2::TokenStream {
    let struct_name = &receiver.ident;
    let struct_name_str = struct_name.to_string();
    let vis = &receiver.vis;
    let key_name = receiver
        .name
        .clone()
        .unwrap_or_else(|| format_ident!("{}Key", struct_name));
    let doc = format!("Key union of [`{struct_name}`].");

    let keyed: Vec<_> = fields
        .iter()
        .filter(|field| !field.skip)
        .filter_map(|field| field.ident.as_ref().map(|ident| (ident, field)))
        .collect();

    let field_idents: Vec<_> = keyed.iter().map(|(ident, _)| *ident).collect();
    let variants: Vec<_> = keyed
        .iter()
        .map(|(ident, _)| format_ident!("{}", utils::to_pascal_case(&ident.to_string())))
        .collect();
    let key_strings: Vec<_> = keyed
        .iter()
        .map(|(ident, field)| {
            field
                .rename
                .clone()
                .unwrap_or_else(|| ident.to_string().trim_start_matches("r#").to_string())
        })
        .collect();
    let count = keyed.len();

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #vis enum #key_name {
            #(#variants,)*
        }

        impl #key_name {
            /// Every key, in field declaration order
            pub const ALL: [Self; #count] = [#(Self::#variants,)*];

            /// The key as it is spelled on the record
            pub const fn as_str(self) -> &'static str {
                match self {
                    #(Self::#variants => #key_strings,)*
                }
            }
        }

        impl ::std::fmt::Display for #key_name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for #key_name {
            type Err = crate::error::TourError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s {
                    #(#key_strings => Ok(Self::#variants),)*
                    other => Err(crate::error::TourError::UnknownKey {
                        shape: #struct_name_str,
                        key: other.to_string(),
                    }),
                }
            }
        }

        impl crate::shapes::KeyOf for #struct_name {
            type Key = #key_name;

            fn keys() -> &'static [Self::Key] {
                &#key_name::ALL
            }

            fn get(&self, key: Self::Key) -> crate::shapes::FieldValue {
                match key {
                    #(#key_name::#variants => crate::shapes::FieldValue::from(self.#field_idents.clone()),)*
                }
            }
        }
    }
}
