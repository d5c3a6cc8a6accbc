//! Errors raised by the ambient APIs around the core algebra.
//!
//! Domain outcomes never appear here; they travel as [`crate::TypedResult`]
//! values. These types cover parsing discriminant names and loading a
//! [`crate::CodeMap`].

use thiserror::Error;

use crate::Kind;

/// A discriminant name that does not belong to the set being parsed.
///
/// # Examples
///
/// ```
/// use typed_result::FailureKind;
///
/// let err = "Teapot".parse::<FailureKind>().unwrap_err();
/// assert_eq!(err.name(), "Teapot");
/// assert!(err.to_string().contains("Conflict"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown kind `{name}`; expected one of: {expected}")]
pub struct UnknownKind {
    name: String,
    expected: String,
}

impl UnknownKind {
    /// Build the error for `name`, listing every discriminant of `K`.
    #[must_use]
    pub fn new<K: Kind>(name: &str) -> Self {
        let expected = K::ALL
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            name: name.to_owned(),
            expected,
        }
    }

    /// The name that failed to parse.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Errors that can occur while loading a [`crate::CodeMap`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CodeMapError {
    /// Settings could not be extracted from the configured providers.
    #[error("failed to gather code map settings: {0}")]
    Gathering(#[from] Box<figment::Error>),

    /// Settings referenced a discriminant outside the set.
    #[error("invalid code map key: {0}")]
    UnknownKind(#[from] UnknownKind),
}

impl From<figment::Error> for CodeMapError {
    fn from(e: figment::Error) -> Self {
        Self::Gathering(Box::new(e))
    }
}
