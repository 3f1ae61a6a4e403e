//! Utility functions for procedural macros
//!
//! This module contains utility functions used by the procedural macros,
//! such as type inspection and identifier conversion.

use syn::{GenericArgument, PathArguments, Type};

/// Check if a type is an Option<T>
pub fn is_option_type(ty: &Type) -> bool {
    option_inner_type(ty).is_some()
}

/// Extract the inner type of an Option<T>
///
/// Only the bare `Option<T>` spelling is recognised; `std::option::Option<T>`
/// is treated as an ordinary type.
pub fn option_inner_type(ty: &Type) -> Option<&Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() || type_path.path.segments.len() != 1 {
        return None;
    }

    let segment = &type_path.path.segments[0];
    if segment.ident != "Option" {
        return None;
    }

    match &segment.arguments {
        PathArguments::AngleBracketed(args) => match args.args.first() {
            Some(GenericArgument::Type(inner)) => Some(inner),
            _ => None,
        },
        _ => None,
    }
}

/// The type a field has once optionality is stripped
pub fn required_type(ty: &Type) -> &Type {
    option_inner_type(ty).unwrap_or(ty)
}

/// Convert a `snake_case` field name to a `PascalCase` variant name
pub fn to_pascal_case(name: &str) -> String {
    name.trim_start_matches("r#")
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
