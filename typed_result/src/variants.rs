//! Built-in failure variants.
//!
//! Each variant is an immutable value: fields are private, set by the
//! constructor and read through accessors. The message is required, so a
//! variant cannot be built without one:
//!
//! ```compile_fail
//! use typed_result::Conflict;
//!
//! let conflict = Conflict::new(None::<String>);
//! ```
//!
//! At the serialisation boundary the same rule applies at construction time:
//!
//! ```
//! # #[cfg(feature = "serde")] {
//! use typed_result::Conflict;
//!
//! let err = serde_json::from_str::<Conflict>("{}").unwrap_err();
//! assert!(err.to_string().contains("missing field `message`"));
//! # }
//! ```

use thiserror::Error;

use crate::Variant;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! message_variant {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Variant)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        #[error("{message}")]
        pub struct $name {
            message: String,
        }

        impl $name {
            #[doc = concat!("Create a `", stringify!($name), "` carrying `message`.")]
            #[must_use]
            pub fn new(message: impl Into<String>) -> Self {
                Self {
                    message: message.into(),
                }
            }

            /// Human-readable description of the outcome.
            #[must_use]
            pub fn message(&self) -> &str {
                &self.message
            }
        }
    };
}

message_variant! {
    /// The operation clashed with existing state, such as a duplicate key.
    ///
    /// ```
    /// use typed_result::Conflict;
    ///
    /// assert_eq!(Conflict::new("dup key").message(), "dup key");
    /// ```
    Conflict
}

message_variant! {
    /// The addressed resource does not exist.
    NotFound
}

message_variant! {
    /// The caller is not authenticated.
    Unauthorized
}

message_variant! {
    /// The caller is authenticated but not allowed to perform the operation.
    Forbidden
}

/// One rejected input field carried by [`ValidationFailed`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Violation {
    field: String,
    message: String,
}

impl Violation {
    /// Create a violation for `field`.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the rejected field.
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Why the field was rejected.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The input was rejected.
///
/// Carries an overall message plus the per-field violations, in the order
/// they were supplied. Violations are attached while building the value;
/// once built it never changes.
///
/// ```
/// use typed_result::ValidationFailed;
///
/// let failed = ValidationFailed::new("invalid signup")
///     .with_violation("email", "must contain @")
///     .with_violation("age", "must be positive");
///
/// let fields: Vec<_> = failed.violations().iter().map(|v| v.field()).collect();
/// assert_eq!(fields, ["email", "age"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Variant)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[error("{message}")]
pub struct ValidationFailed {
    message: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    violations: Vec<Violation>,
}

impl ValidationFailed {
    /// Create a validation failure with no field violations.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            violations: Vec::new(),
        }
    }

    /// Return the failure with `field` recorded as a violation.
    #[must_use]
    pub fn with_violation(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.violations.push(Violation::new(field, message));
        self
    }

    /// Human-readable description of the outcome.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Per-field violations, in the order they were added.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}
