//! Shape derive macro implementation
//!
//! This module contains the implementation of the Shape derive macro, which
//! generates the pick, omit, partial, required and readonly variants of a
//! struct.

use darling::util::PathList;
use darling::{ast, FromDeriveInput, FromField, FromMeta};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Ident, Type, Visibility};

use crate::utils;

/// Receiver for the struct that derives `Shape`
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(shape), supports(struct_named))]
struct ShapeReceiver {
    /// The struct identifier
    ident: Ident,
    /// Visibility shared by every generated shape
    vis: Visibility,
    /// The struct data with parsed fields
    data: ast::Data<(), ShapeFieldReceiver>,
    /// `pick(name = "..", fields(..))` entries
    #[darling(multiple)]
    pick: Vec<SubsetSpec>,
    /// `omit(name = "..", fields(..))` entries
    #[darling(multiple)]
    omit: Vec<SubsetSpec>,
    #[darling(default)]
    partial: Option<Ident>,
    #[darling(default)]
    required: Option<Ident>,
    #[darling(default)]
    readonly: Option<Ident>,
}

/// Receiver for the fields in the struct
#[derive(Debug, FromField)]
struct ShapeFieldReceiver {
    ident: Option<Ident>,
    ty: Type,
}

/// A named subset of fields
#[derive(Debug, FromMeta)]
struct SubsetSpec {
    name: Ident,
    fields: PathList,
}

/// A named field of the source struct
#[derive(Clone, Copy)]
struct FieldInfo<'a> {
    ident: &'a Ident,
    ty: &'a Type,
}

/// Process the Shape derive macro
pub fn process_derive_shape(input: TokenStream) -> TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    // Parse with darling
    let receiver = match ShapeReceiver::from_derive_input(&input) {
        Ok(receiver) => receiver,
        Err(err) => return err.write_errors().into(),
    };

    match generate_shapes(&receiver) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.write_errors().into(),
    }
}

/// Generate every shape requested on the struct
fn generate_shapes(receiver: &ShapeReceiver) -> darling::Result<TokenStream2> {
    let ast::Data::Struct(fields) = &receiver.data else {
        unreachable!("Darling ensures this is a struct")
    };
    let fields: Vec<FieldInfo<'_>> = fields
        .iter()
        .filter_map(|field| {
            Some(FieldInfo {
                ident: field.ident.as_ref()?,
                ty: &field.ty,
            })
        })
        .collect();

    let mut errors = darling::Error::accumulator();
    let mut expanded = Vec::new();

    for spec in &receiver.pick {
        if let Some(selected) = errors.handle(select_fields(&fields, spec, true)) {
            expanded.push(generate_subset(receiver, &spec.name, &selected, "picks"));
        }
    }
    for spec in &receiver.omit {
        if let Some(selected) = errors.handle(select_fields(&fields, spec, false)) {
            expanded.push(generate_subset(receiver, &spec.name, &selected, "omits"));
        }
    }
    if let Some(name) = &receiver.partial {
        expanded.push(generate_partial(receiver, name, &fields));
    }
    if let Some(name) = &receiver.required {
        expanded.push(generate_required(receiver, name, &fields));
    }
    if let Some(name) = &receiver.readonly {
        expanded.push(generate_readonly(receiver, name, &fields));
    }

    errors.finish()?;
    Ok(quote! { #(#expanded)* })
}

/// Resolve a subset spec against the struct fields
///
/// With `keep` set the listed fields are returned (pick), otherwise every
/// field that is not listed (omit). Source order is preserved.
fn select_fields<'a>(
    fields: &[FieldInfo<'a>],
    spec: &SubsetSpec,
    keep: bool,
) -> darling::Result<Vec<FieldInfo<'a>>> {
    let mut errors = darling::Error::accumulator();
    for path in spec.fields.iter() {
        if !fields.iter().any(|field| path.is_ident(field.ident)) {
            errors.push(
                darling::Error::custom(format!(
                    "no field named `{}` on this struct",
                    quote!(#path)
                ))
                .with_span(path),
            );
        }
    }
    errors.finish()?;

    Ok(fields
        .iter()
        .copied()
        .filter(|field| {
            let listed = spec.fields.iter().any(|path| path.is_ident(field.ident));
            listed == keep
        })
        .collect())
}

/// Generate a pick or omit shape
fn generate_subset(
    receiver: &ShapeReceiver,
    name: &Ident,
    selected: &[FieldInfo<'_>],
    verb: &str,
) -> TokenStream2 {
    let base = &receiver.ident;
    let vis = &receiver.vis;
    let doc = format!("Shape that {verb} fields of [`{base}`].");
    let idents: Vec<_> = selected.iter().map(|field| field.ident).collect();
    let types: Vec<_> = selected.iter().map(|field| field.ty).collect();

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq)]
        #vis struct #name {
            #(pub #idents: #types,)*
        }

        impl From<&#base> for #name {
            fn from(source: &#base) -> Self {
                Self {
                    #(#idents: source.#idents.clone(),)*
                }
            }
        }
    }
}

/// Generate a shape where every field is optional
fn generate_partial(receiver: &ShapeReceiver, name: &Ident, fields: &[FieldInfo<'_>]) -> TokenStream2 {
    let base = &receiver.ident;
    let vis = &receiver.vis;
    let doc = format!("[`{base}`] with every field optional.");
    let idents: Vec<_> = fields.iter().map(|field| field.ident).collect();
    let types: Vec<_> = fields
        .iter()
        .map(|field| utils::required_type(field.ty))
        .collect();

    // Option fields already carry the right type
    let conversions = fields.iter().map(|field| {
        let ident = field.ident;
        if utils::is_option_type(field.ty) {
            quote! { #ident: source.#ident.clone() }
        } else {
            quote! { #ident: Some(source.#ident.clone()) }
        }
    });

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, Default, PartialEq)]
        #vis struct #name {
            #(pub #idents: Option<#types>,)*
        }

        impl #name {
            /// Overlay the fields present in `overlay` onto this shape
            #[must_use]
            pub fn merge(self, overlay: Self) -> Self {
                Self {
                    #(#idents: overlay.#idents.or(self.#idents),)*
                }
            }

            /// Whether no field is present
            pub fn is_empty(&self) -> bool {
                true #(&& self.#idents.is_none())*
            }
        }

        impl From<&#base> for #name {
            fn from(source: &#base) -> Self {
                Self {
                    #(#conversions,)*
                }
            }
        }
    }
}

/// Generate a shape where every field is mandatory
fn generate_required(receiver: &ShapeReceiver, name: &Ident, fields: &[FieldInfo<'_>]) -> TokenStream2 {
    let base = &receiver.ident;
    let vis = &receiver.vis;
    let doc = format!("[`{base}`] with every field mandatory.");
    let shape_name = name.to_string();
    let idents: Vec<_> = fields.iter().map(|field| field.ident).collect();
    let types: Vec<_> = fields
        .iter()
        .map(|field| utils::required_type(field.ty))
        .collect();

    let missing = |ident: &Ident| {
        let field_name = ident.to_string();
        quote! {
            crate::error::TourError::MissingField {
                shape: #shape_name,
                field: #field_name,
            }
        }
    };

    let from_base = fields.iter().map(|field| {
        let ident = field.ident;
        if utils::is_option_type(field.ty) {
            let error = missing(ident);
            quote! { #ident: source.#ident.clone().ok_or(#error)? }
        } else {
            quote! { #ident: source.#ident.clone() }
        }
    });

    let into_base = fields.iter().map(|field| {
        let ident = field.ident;
        if utils::is_option_type(field.ty) {
            quote! { #ident: Some(required.#ident) }
        } else {
            quote! { #ident: required.#ident }
        }
    });

    let from_partial = receiver.partial.as_ref().map(|partial| {
        let unwraps = fields.iter().map(|field| {
            let ident = field.ident;
            let error = missing(ident);
            quote! { #ident: partial.#ident.ok_or(#error)? }
        });
        quote! {
            impl TryFrom<#partial> for #name {
                type Error = crate::error::TourError;

                fn try_from(partial: #partial) -> ::core::result::Result<Self, Self::Error> {
                    Ok(Self {
                        #(#unwraps,)*
                    })
                }
            }
        }
    });

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq)]
        #vis struct #name {
            #(pub #idents: #types,)*
        }

        impl TryFrom<&#base> for #name {
            type Error = crate::error::TourError;

            fn try_from(source: &#base) -> ::core::result::Result<Self, Self::Error> {
                Ok(Self {
                    #(#from_base,)*
                })
            }
        }

        impl From<#name> for #base {
            fn from(required: #name) -> Self {
                Self {
                    #(#into_base,)*
                }
            }
        }

        #from_partial
    }
}

/// Generate a shape whose fields cannot be written after construction
fn generate_readonly(receiver: &ShapeReceiver, name: &Ident, fields: &[FieldInfo<'_>]) -> TokenStream2 {
    let base = &receiver.ident;
    let vis = &receiver.vis;
    let doc = format!("[`{base}`] whose fields are read-only after construction.");
    let idents: Vec<_> = fields.iter().map(|field| field.ident).collect();
    let types: Vec<_> = fields.iter().map(|field| field.ty).collect();

    quote! {
        #[doc = #doc]
        #[derive(Debug, Clone, PartialEq)]
        #vis struct #name {
            #(#idents: #types,)*
        }

        impl #name {
            /// Create the shape; this is the only place its fields are written
            #[must_use]
            pub fn new(#(#idents: #types),*) -> Self {
                Self { #(#idents),* }
            }

            #(
                pub fn #idents(&self) -> &#types {
                    &self.#idents
                }
            )*
        }

        impl From<#base> for #name {
            fn from(source: #base) -> Self {
                Self {
                    #(#idents: source.#idents,)*
                }
            }
        }
    }
}
