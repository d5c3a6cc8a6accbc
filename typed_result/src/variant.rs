//! Capability traits for closed outcome sets.
//!
//! A *variant* is an immutable value describing one outcome kind. A *set* is
//! an enum that closes over a fixed list of variants. Membership of a variant
//! in a set is a compile-time fact recorded by [`Member`]; the derives in
//! [`typed_result_macros`] generate all of these impls.

use std::fmt;
use std::hash::Hash;
use std::str::FromStr;

use crate::UnknownKind;

/// Marks a type as an admissible outcome variant.
///
/// Implementors are immutable value objects: their fields are set once at
/// construction and exposed through accessors. Every variant carries a
/// human-readable message.
///
/// # Examples
///
/// ```
/// use typed_result::{Conflict, Variant};
///
/// let conflict = Conflict::new("dup key");
/// assert_eq!(Conflict::KIND, "Conflict");
/// assert_eq!(conflict.message(), "dup key");
/// ```
pub trait Variant: Clone + fmt::Debug {
    /// Discriminant name of this variant.
    ///
    /// A set must wrap the variant in an enum variant of the same name, so
    /// this is also the name its set's [`Kind`] reports:
    ///
    /// ```compile_fail
    /// use typed_result::{Variant, VariantSet};
    ///
    /// #[derive(Debug, Clone, Variant)]
    /// #[variant(kind = "UpstreamTimeout")]
    /// struct Timeout {
    ///     message: String,
    /// }
    ///
    /// #[derive(Debug, Clone, VariantSet)]
    /// enum Upstream {
    ///     Timeout(Timeout),
    /// }
    /// ```
    const KIND: &'static str;

    /// Human-readable description of the outcome.
    fn message(&self) -> &str;
}

/// Discriminant of a closed set.
///
/// Generated as `<Set>Kind` by `#[derive(VariantSet)]`. `Display` and
/// `FromStr` both use [`Kind::name`].
pub trait Kind:
    Copy
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + FromStr<Err = UnknownKind>
    + Send
    + Sync
    + 'static
{
    /// Every discriminant of the set, in declaration order.
    const ALL: &'static [Self];

    /// Name of the discriminant, matching the set's enum variant.
    fn name(self) -> &'static str;
}

/// A closed set of outcome variants.
///
/// Sets are enums, so a `match` over one is checked for exhaustiveness by the
/// compiler. Adding a member breaks every `match` that does not handle it.
///
/// ```compile_fail
/// use typed_result::Failure;
///
/// fn describe(failure: &Failure) -> &'static str {
///     match failure {
///         Failure::Conflict(_) => "conflict",
///         Failure::NotFound(_) => "not found",
///         // `ValidationFailed`, `Unauthorized` and `Forbidden` are missing.
///     }
/// }
/// ```
pub trait VariantSet: Clone + fmt::Debug {
    /// Discriminant type of the set.
    type Kind: Kind;

    /// Discriminant of the held variant.
    fn kind(&self) -> Self::Kind;

    /// Message of the held variant.
    fn message(&self) -> &str;
}

/// Records that `Self` is a member of the closed set `S`.
///
/// Only types listed in `S` implement `Member<S>`, so APIs bounded on it
/// reject foreign types at compile time.
///
/// ```compile_fail
/// use typed_result::{Failure, TypedResult};
///
/// #[derive(Clone, Debug)]
/// struct Timeout;
///
/// let _: TypedResult<u8, Failure> = TypedResult::failure(Timeout);
/// ```
///
/// A type joins a set at most once, however its path is spelled:
///
/// ```compile_fail
/// use typed_result::{Conflict, VariantSet};
///
/// #[derive(Debug, Clone, VariantSet)]
/// enum Clashing {
///     Conflict(Conflict),
///     Clash(typed_result::Conflict),
/// }
/// ```
pub trait Member<S: VariantSet>: Variant {
    /// Discriminant this variant is stored under in `S`.
    const KIND_IN_SET: S::Kind;

    /// Wrap the variant in its set.
    fn into_set(self) -> S;

    /// Take the variant back out of `set`, returning the set unchanged when it
    /// holds a different member.
    ///
    /// # Errors
    ///
    /// Returns `set` when it does not hold a `Self`.
    fn try_from_set(set: S) -> Result<Self, S>;

    /// Borrow the variant from `set` when it holds one.
    fn project(set: &S) -> Option<&Self>;
}

/// Byte-wise string equality usable in constant evaluation.
///
/// Generated set code asserts with it that each member's [`Variant::KIND`]
/// matches the enum variant wrapping it.
#[doc(hidden)]
#[must_use]
pub const fn kind_names_match(declared: &str, listed: &str) -> bool {
    let mut left = declared.as_bytes();
    let mut right = listed.as_bytes();
    loop {
        match (left.split_first(), right.split_first()) {
            (None, None) => return true,
            (Some((a, left_rest)), Some((b, right_rest))) if *a == *b => {
                left = left_rest;
                right = right_rest;
            }
            _ => return false,
        }
    }
}
