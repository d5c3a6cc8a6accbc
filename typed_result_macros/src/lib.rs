//! Procedural macros for `typed_result`.
//!
//! Two derives are provided:
//!
//! - `Variant` marks a struct as an admissible outcome
//!   variant and exposes its message field.
//! - `VariantSet` turns an enum of variants into a closed
//!   outcome set, generating its discriminant enum, membership impls and
//!   `From` conversions.
//!
//! Generated code reaches the runtime crate through `::typed_result` unless a
//! `crate = "..."` override is supplied.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `typed_result::Variant`.
///
/// The struct must have named fields and a message field: either a field
/// called `message` or one marked `#[variant(message)]`. The discriminant
/// name defaults to the struct name and can be overridden with
/// `#[variant(kind = "...")]`.
#[proc_macro_derive(Variant, attributes(variant))]
pub fn derive_variant(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand_variant(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro for `typed_result::VariantSet`.
///
/// Every enum variant must wrap exactly one variant type in a tuple variant,
/// for example `Conflict(Conflict)`. A companion `<Enum>Kind` discriminant
/// enum is generated alongside the set.
#[proc_macro_derive(VariantSet, attributes(variant_set))]
pub fn derive_variant_set(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand_variant_set(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
