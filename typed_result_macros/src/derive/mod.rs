//! Expansion entry points for the `Variant` and `VariantSet` derives.

use proc_macro2::TokenStream;
use syn::DeriveInput;

mod crate_path;
pub(crate) mod parse;
pub(crate) mod variant;
pub(crate) mod variant_set;

/// Parses and expands `#[derive(Variant)]`.
pub(crate) fn expand_variant(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_variant(input)?;
    Ok(variant::generate(&parsed))
}

/// Parses and expands `#[derive(VariantSet)]`.
pub(crate) fn expand_variant_set(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = parse::parse_set(input)?;
    Ok(variant_set::generate(&parsed))
}
