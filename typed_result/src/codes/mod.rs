//! Numeric codes for outcome discriminants.
//!
//! Adapters at the edge of a system usually need to turn an outcome into a
//! number: an HTTP status, a process exit code, a gRPC status. A [`CodeMap`]
//! keeps that table next to the closed set it describes so the core only has
//! to hand over a discriminant. Tables can be layered from TOML files and
//! environment variables through `figment`.

use std::collections::BTreeMap;

use crate::{FailureKind, Kind, State, TypedResult, VariantSet};

mod load;

pub use load::{ENV_PREFIX, providers};

/// Maps the success state and each discriminant of `K` to a code.
///
/// Kinds without an entry resolve to the fallback code.
///
/// # Examples
///
/// ```
/// use typed_result::{CodeMap, Conflict, TypedResult};
///
/// let codes = CodeMap::default();
/// let result: TypedResult<()> = TypedResult::failure(Conflict::new("dup key"));
/// assert_eq!(codes.code_for(&result), 409);
/// assert_eq!(codes.code_for(&TypedResult::<()>::success(())), 200);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeMap<K> {
    success: u16,
    fallback: u16,
    codes: BTreeMap<K, u16>,
}

impl<K: Kind> CodeMap<K> {
    /// Create an empty table with the given success and fallback codes.
    #[must_use]
    pub const fn new(success: u16, fallback: u16) -> Self {
        Self {
            success,
            fallback,
            codes: BTreeMap::new(),
        }
    }

    /// Return the table with `kind` mapped to `code`.
    #[must_use]
    pub fn with(mut self, kind: K, code: u16) -> Self {
        self.codes.insert(kind, code);
        self
    }

    /// Code used for the success state.
    #[must_use]
    pub const fn success_code(&self) -> u16 {
        self.success
    }

    /// Code used for kinds without an entry.
    #[must_use]
    pub const fn fallback_code(&self) -> u16 {
        self.fallback
    }

    /// Code for a container state.
    #[must_use]
    pub fn code(&self, state: State<K>) -> u16 {
        match state {
            State::Success => self.success,
            State::Failure(kind) => self.codes.get(&kind).copied().unwrap_or_else(|| {
                tracing::trace!(%kind, code = self.fallback, "no code mapped; using fallback");
                self.fallback
            }),
        }
    }

    /// Code for the state of `result`.
    #[must_use]
    pub fn code_for<T, F>(&self, result: &TypedResult<T, F>) -> u16
    where
        F: VariantSet<Kind = K>,
    {
        self.code(result.state())
    }

    /// Explicitly mapped kinds and their codes, in discriminant order.
    pub fn iter(&self) -> impl Iterator<Item = (K, u16)> + '_ {
        self.codes.iter().map(|(kind, code)| (*kind, *code))
    }
}

impl Default for CodeMap<FailureKind> {
    /// HTTP status conventions for the built-in failure set.
    fn default() -> Self {
        Self::new(200, 500)
            .with(FailureKind::Conflict, 409)
            .with(FailureKind::NotFound, 404)
            .with(FailureKind::ValidationFailed, 422)
            .with(FailureKind::Unauthorized, 401)
            .with(FailureKind::Forbidden, 403)
    }
}
