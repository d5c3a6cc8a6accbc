//! Token generation for `#[derive(VariantSet)]`.
//!
//! A set named `Failure` expands to:
//!
//! - a `FailureKind` discriminant enum implementing `Kind`, `Display` and
//!   `FromStr`;
//! - `VariantSet for Failure`;
//! - `Member<Failure>` and `From<_> for Failure` per wrapped type, each with a
//!   constant assertion that the wrapped type's `Variant::KIND` equals the
//!   enum variant name;
//! - `is_<member>()` predicates on `Failure`.

use heck::ToSnakeCase;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::crate_path;
use super::parse::{SetInput, SetMember};

/// Expands the parsed set into its discriminant enum and trait impls.
pub(crate) fn generate(input: &SetInput) -> TokenStream {
    let krate = crate_path::resolve(input.crate_path.as_ref());
    let kind_ident = format_ident!("{}Kind", input.ident);

    let kind_enum = kind_enum(input, &kind_ident, &krate);
    let set_impl = set_impl(input, &kind_ident, &krate);
    let members = input
        .members
        .iter()
        .map(|member| member_impl(input, member, &kind_ident, &krate));

    quote! {
        #kind_enum
        #set_impl
        #( #members )*
    }
}

fn kind_enum(input: &SetInput, kind_ident: &syn::Ident, krate: &TokenStream) -> TokenStream {
    let vis = &input.vis;
    let names: Vec<_> = input.members.iter().map(|m| &m.ident).collect();
    let name_strs: Vec<_> = names.iter().map(ToString::to_string).collect();
    let enum_doc = format!("Discriminant of [`{}`].", input.ident);
    let variant_docs = name_strs
        .iter()
        .map(|name| format!("Tags a `{name}` outcome."));

    quote! {
        #[doc = #enum_doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #vis enum #kind_ident {
            #(
                #[doc = #variant_docs]
                #names,
            )*
        }

        #[automatically_derived]
        impl #krate::Kind for #kind_ident {
            const ALL: &'static [Self] = &[ #( Self::#names ),* ];

            fn name(self) -> &'static str {
                match self {
                    #( Self::#names => #name_strs, )*
                }
            }
        }

        #[automatically_derived]
        impl ::core::fmt::Display for #kind_ident {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(#krate::Kind::name(*self))
            }
        }

        #[automatically_derived]
        impl ::core::str::FromStr for #kind_ident {
            type Err = #krate::UnknownKind;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                match s {
                    #( #name_strs => ::core::result::Result::Ok(Self::#names), )*
                    other => ::core::result::Result::Err(#krate::UnknownKind::new::<Self>(other)),
                }
            }
        }
    }
}

fn set_impl(input: &SetInput, kind_ident: &syn::Ident, krate: &TokenStream) -> TokenStream {
    let set = &input.ident;
    let vis = &input.vis;
    let names: Vec<_> = input.members.iter().map(|m| &m.ident).collect();
    let message_arms = names.iter().map(|name| {
        quote! { Self::#name(inner) => #krate::Variant::message(inner), }
    });
    let predicates = input.members.iter().map(|m| {
        let name = &m.ident;
        let predicate = format_ident!("is_{}", name.to_string().to_snake_case());
        let doc = format!("Returns `true` when this outcome is a `{name}`.");
        quote! {
            #[doc = #doc]
            #[must_use]
            #vis const fn #predicate(&self) -> bool {
                ::core::matches!(self, Self::#name(_))
            }
        }
    });

    quote! {
        #[automatically_derived]
        impl #krate::VariantSet for #set {
            type Kind = #kind_ident;

            fn kind(&self) -> Self::Kind {
                match self {
                    #( Self::#names(_) => #kind_ident::#names, )*
                }
            }

            fn message(&self) -> &str {
                match self {
                    #( #message_arms )*
                }
            }
        }

        impl #set {
            #( #predicates )*
        }
    }
}

fn member_impl(
    input: &SetInput,
    member: &SetMember,
    kind_ident: &syn::Ident,
    krate: &TokenStream,
) -> TokenStream {
    let set = &input.ident;
    let name = &member.ident;
    let name_str = name.to_string();
    let ty = &member.ty;
    let mismatch = format!(
        "`{set}::{name}` must wrap a variant whose `Variant::KIND` is \"{name}\""
    );

    quote! {
        const _: () = ::core::assert!(
            #krate::kind_names_match(<#ty as #krate::Variant>::KIND, #name_str),
            #mismatch
        );

        #[automatically_derived]
        impl #krate::Member<#set> for #ty {
            const KIND_IN_SET: #kind_ident = #kind_ident::#name;

            fn into_set(self) -> #set {
                #set::#name(self)
            }

            #[allow(unreachable_patterns, reason = "single-member sets have no other arm")]
            fn try_from_set(set: #set) -> ::core::result::Result<Self, #set> {
                match set {
                    #set::#name(inner) => ::core::result::Result::Ok(inner),
                    other => ::core::result::Result::Err(other),
                }
            }

            #[allow(unreachable_patterns, reason = "single-member sets have no other arm")]
            fn project(set: &#set) -> ::core::option::Option<&Self> {
                match set {
                    #set::#name(inner) => ::core::option::Option::Some(inner),
                    _ => ::core::option::Option::None,
                }
            }
        }

        #[automatically_derived]
        impl ::core::convert::From<#ty> for #set {
            fn from(inner: #ty) -> Self {
                Self::#name(inner)
            }
        }
    }
}
