//! Token generation for `#[derive(Variant)]`.

use proc_macro2::TokenStream;
use quote::quote;

use super::crate_path;
use super::parse::VariantInput;

/// Implements `Variant` for the parsed struct.
pub(crate) fn generate(input: &VariantInput) -> TokenStream {
    let krate = crate_path::resolve(input.crate_path.as_ref());
    let ident = &input.ident;
    let kind = &input.kind;
    let message = &input.message;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        #[automatically_derived]
        impl #impl_generics #krate::Variant for #ident #ty_generics #where_clause {
            const KIND: &'static str = #kind;

            fn message(&self) -> &str {
                &self.#message
            }
        }
    }
}
