//! Procedural macros for the type-tour crate
//!
//! This crate derives the structural shape utilities (pick, omit, partial,
//! required, readonly and key unions) from a plain struct definition, so the
//! derived shapes are checked by the compiler instead of at runtime.
//!
//! The generated code refers to `crate::error::TourError` and
//! `crate::shapes::{FieldValue, KeyOf}`, so the derives are meant to be used
//! inside the `type-tour` crate itself.

use proc_macro::TokenStream;

// Import modules
mod key_of_impl;
mod shape_impl;
mod utils;

/// Derive macro for generating shapes derived from a struct
///
/// Every entry of the `#[shape(...)]` attribute produces one new struct next
/// to the annotated one.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Shape)]
/// #[shape(
///     pick(name = "Username", fields(name, last_name)),
///     omit(name = "UserWithoutId", fields(id)),
///     partial = "PartialUser",
///     required = "RequiredUser",
///     readonly = "ReadonlyUser"
/// )]
/// pub struct User2 {
///     pub id: u32,
///     pub name: String,
///     pub last_name: String,
///     pub age: Option<u32>,
/// }
/// ```
///
/// * `pick` keeps only the listed fields, `omit` keeps every other field.
/// * `partial` wraps every field in `Option`.
/// * `required` unwraps every `Option` field; building it from the base
///   struct or from the partial shape fails with `TourError::MissingField`.
/// * `readonly` hides every field behind an accessor.
#[proc_macro_derive(Shape, attributes(shape))]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    shape_impl::process_derive_shape(input)
}

/// KeyOf derive macro
///
/// This macro generates a key union for a struct: a fieldless enum with one
/// variant per field, plus an implementation of `crate::shapes::KeyOf` that
/// reads a field through its key.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(KeyOf)]
/// #[key_of(name = "User2Key")]
/// struct User2 {
///     id: u32,
///     #[key_of(rename = "lastName")]
///     last_name: String,
/// }
/// ```
#[proc_macro_derive(KeyOf, attributes(key_of))]
pub fn derive_key_of(input: TokenStream) -> TokenStream {
    key_of_impl::process_derive_key_of(input)
}
