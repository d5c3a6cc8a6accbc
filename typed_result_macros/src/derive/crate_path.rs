//! Crate path resolution for renamed dependencies.
//!
//! Generated impls name traits through `::typed_result` by default. Crates
//! that depend on `typed_result` under another name pass
//! `crate = "..."` in the derive attribute and the returned tokens are
//! spliced in instead.

use proc_macro2::TokenStream;
use quote::quote;

/// Resolve the path used to reach the runtime crate from generated code.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::typed_result }, |path| quote! { #path })
}
