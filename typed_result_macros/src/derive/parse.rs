//! Input parsing for the `Variant` and `VariantSet` derives.
//!
//! Both derives validate their input in one pass so expansion fails fast
//! with an error spanned on the offending item.

use std::collections::HashSet;

use quote::ToTokens;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, Data, DeriveInput, Fields, FieldsNamed, Lit, LitStr};

/// Parsed form of a struct deriving `Variant`.
pub(crate) struct VariantInput {
    pub ident: syn::Ident,
    pub generics: syn::Generics,
    pub kind: String,
    pub message: syn::Ident,
    pub crate_path: Option<syn::Path>,
}

/// One member of a closed set: the enum variant and the type it wraps.
pub(crate) struct SetMember {
    pub ident: syn::Ident,
    pub ty: syn::Type,
}

/// Parsed form of an enum deriving `VariantSet`.
pub(crate) struct SetInput {
    pub ident: syn::Ident,
    pub vis: syn::Visibility,
    pub members: Vec<SetMember>,
    pub crate_path: Option<syn::Path>,
}

/// Iterate every `#[<name>(...)]` attribute and apply `f` to each key.
fn for_each_meta<F>(attrs: &[Attribute], name: &str, mut f: F) -> syn::Result<()>
where
    F: FnMut(&ParseNestedMeta) -> syn::Result<()>,
{
    for attr in attrs.iter().filter(|a| a.path().is_ident(name)) {
        attr.parse_nested_meta(|meta| f(&meta))?;
    }
    Ok(())
}

fn lit_str(meta: &ParseNestedMeta, key: &str) -> syn::Result<LitStr> {
    match meta.value()?.parse::<Lit>()? {
        Lit::Str(s) => Ok(s),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string"),
        )),
    }
}

fn crate_path(meta: &ParseNestedMeta) -> syn::Result<syn::Path> {
    let s = lit_str(meta, "crate")?;
    syn::parse_str(&s.value()).map_err(|e| syn::Error::new(s.span(), e))
}

fn unknown_key(meta: &ParseNestedMeta, attr: &str) -> syn::Error {
    let key = meta.path.to_token_stream().to_string();
    meta.error(format!("unknown `{attr}` attribute key `{key}`"))
}

/// Gathers the struct identifier, discriminant name and message field for
/// `#[derive(Variant)]`.
pub(crate) fn parse_variant(input: &DeriveInput) -> syn::Result<VariantInput> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Variant can only be derived for structs",
        ));
    };
    let Fields::Named(named) = &data.fields else {
        return Err(syn::Error::new_spanned(
            data.struct_token,
            "Variant requires named fields",
        ));
    };

    let mut kind = None;
    let mut path = None;
    for_each_meta(&input.attrs, "variant", |meta| {
        match meta.path.get_ident().map(ToString::to_string).as_deref() {
            Some("kind") => {
                let value = lit_str(meta, "kind")?;
                if value.value().is_empty() {
                    return Err(syn::Error::new(value.span(), "kind must not be empty"));
                }
                kind = Some(value.value());
                Ok(())
            }
            Some("crate") => {
                path = Some(crate_path(meta)?);
                Ok(())
            }
            _ => Err(unknown_key(meta, "variant")),
        }
    })?;

    Ok(VariantInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        kind: kind.unwrap_or_else(|| input.ident.to_string()),
        message: message_field(named)?,
        crate_path: path,
    })
}

/// Picks the field exposed through `Variant::message`.
///
/// A field marked `#[variant(message)]` wins; otherwise a field literally
/// named `message` is used.
fn message_field(fields: &FieldsNamed) -> syn::Result<syn::Ident> {
    let mut marked: Option<syn::Ident> = None;
    for field in &fields.named {
        let mut is_marked = false;
        for_each_meta(&field.attrs, "variant", |meta| {
            if meta.path.is_ident("message") {
                is_marked = true;
                Ok(())
            } else {
                Err(unknown_key(meta, "variant"))
            }
        })?;
        if !is_marked {
            continue;
        }
        if marked.is_some() {
            return Err(syn::Error::new_spanned(
                field,
                "only one field may be marked `#[variant(message)]`",
            ));
        }
        marked.clone_from(&field.ident);
    }

    marked.map_or_else(
        || {
            fields
                .named
                .iter()
                .filter_map(|f| f.ident.clone())
                .find(|ident| ident == "message")
                .ok_or_else(|| {
                    syn::Error::new_spanned(
                        fields,
                        "Variant requires a `message` field or a field marked `#[variant(message)]`",
                    )
                })
        },
        Ok,
    )
}

/// Gathers the enum identifier, visibility and members for
/// `#[derive(VariantSet)]`.
pub(crate) fn parse_set(input: &DeriveInput) -> syn::Result<SetInput> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "VariantSet can only be derived for enums",
        ));
    };
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "VariantSet does not support generic parameters",
        ));
    }
    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "VariantSet requires at least one variant",
        ));
    }

    let mut path = None;
    for_each_meta(&input.attrs, "variant_set", |meta| {
        if meta.path.is_ident("crate") {
            path = Some(crate_path(meta)?);
            Ok(())
        } else {
            Err(unknown_key(meta, "variant_set"))
        }
    })?;

    let members = data
        .variants
        .iter()
        .map(parse_member)
        .collect::<syn::Result<Vec<_>>>()?;
    reject_duplicate_types(&members)?;

    Ok(SetInput {
        ident: input.ident.clone(),
        vis: input.vis.clone(),
        members,
        crate_path: path,
    })
}

fn parse_member(variant: &syn::Variant) -> syn::Result<SetMember> {
    let shape_error = || {
        syn::Error::new_spanned(
            variant,
            "VariantSet members must wrap exactly one variant type, e.g. `Conflict(Conflict)`",
        )
    };
    let Fields::Unnamed(fields) = &variant.fields else {
        return Err(shape_error());
    };
    let mut iter = fields.unnamed.iter();
    match (iter.next(), iter.next()) {
        (Some(field), None) => Ok(SetMember {
            ident: variant.ident.clone(),
            ty: field.ty.clone(),
        }),
        _ => Err(shape_error()),
    }
}

/// Two members wrapping the same type would make membership ambiguous.
///
/// Types are compared as written. `Conflict` and `typed_result::Conflict`
/// name the same type but pass this check; the compiler then rejects the
/// pair as conflicting `Member` and `From` impls (E0119).
fn reject_duplicate_types(members: &[SetMember]) -> syn::Result<()> {
    let mut seen = HashSet::new();
    for member in members {
        let key = member.ty.to_token_stream().to_string();
        if !seen.insert(key) {
            return Err(syn::Error::new_spanned(
                &member.ty,
                "each variant type may appear in a VariantSet only once",
            ));
        }
    }
    Ok(())
}
