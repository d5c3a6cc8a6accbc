//! The result container.
//!
//! A [`TypedResult`] holds exactly one outcome: a success payload or one
//! member of a closed failure set. Its state is fixed at construction;
//! transforms always return a new container.

use crate::dispatch::Dispatch;
use crate::{Failure, Member, VariantSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod iter;

/// Outcome of an operation: a success payload `T` or a failure from the
/// closed set `F`.
///
/// # Examples
///
/// ```
/// use typed_result::{Conflict, Failure, TypedResult};
///
/// fn insert(key: &str) -> TypedResult<u64> {
///     if key == "taken" {
///         return TypedResult::failure(Conflict::new(format!("{key} already exists")));
///     }
///     TypedResult::success(42)
/// }
///
/// let message = match insert("taken") {
///     TypedResult::Success(id) => format!("created {id}"),
///     TypedResult::Failure(Failure::Conflict(c)) => format!("conflict: {}", c.message()),
///     TypedResult::Failure(other) => format!("failed: {other}"),
/// };
/// assert_eq!(message, "conflict: taken already exists");
/// ```
#[must_use = "a TypedResult may hold a failure that should be handled"]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TypedResult<T, F = Failure> {
    /// The operation succeeded with a payload.
    Success(T),
    /// The operation ended in one member of the failure set.
    Failure(F),
}

/// Which state a [`TypedResult`] is in, with the failure discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State<K> {
    /// The container holds a success payload.
    Success,
    /// The container holds a failure of the given kind.
    Failure(K),
}

impl<T, F: VariantSet> TypedResult<T, F> {
    /// Construct a container in the success state.
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Construct a container in the failure state from a member of `F`.
    pub fn failure<V: Member<F>>(variant: V) -> Self {
        Self::Failure(variant.into_set())
    }

    /// Returns `true` when the container holds a success payload.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` when the container holds a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Report the state and, for failures, the discriminant.
    #[must_use]
    pub fn state(&self) -> State<F::Kind> {
        match self {
            Self::Success(_) => State::Success,
            Self::Failure(failure) => State::Failure(failure.kind()),
        }
    }

    /// Discriminant of the held failure, if any.
    #[must_use]
    pub fn failure_kind(&self) -> Option<F::Kind> {
        self.as_failure().map(VariantSet::kind)
    }

    /// Borrow the success payload, if any.
    #[must_use]
    pub const fn as_success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrow the failure, if any.
    #[must_use]
    pub const fn as_failure(&self) -> Option<&F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Borrow the failure as a `V` when that is the member held.
    #[must_use]
    pub fn variant<V: Member<F>>(&self) -> Option<&V> {
        self.as_failure().and_then(V::project)
    }

    /// Returns `true` when the container holds a `V` failure.
    #[must_use]
    pub fn holds<V: Member<F>>(&self) -> bool {
        self.variant::<V>().is_some()
    }

    /// Message of the held failure, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.as_failure().map(VariantSet::message)
    }

    /// Consume the container by running exactly one of two handlers.
    pub fn fold<R, S, E>(self, on_success: S, on_failure: E) -> R
    where
        S: FnOnce(T) -> R,
        E: FnOnce(F) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(failure) => on_failure(failure),
        }
    }

    /// Start a handler-per-variant dispatch.
    ///
    /// `on_success` runs immediately for a success. Failures are matched by
    /// the [`Dispatch::on`] handlers that follow, and
    /// [`Dispatch::otherwise`] is required to obtain the output.
    ///
    /// ```
    /// use typed_result::{Conflict, NotFound, TypedResult};
    ///
    /// let result: TypedResult<&str> = TypedResult::failure(NotFound::new("no user 7"));
    /// let status = result
    ///     .dispatch(|_| 200)
    ///     .on(|_: Conflict| 409)
    ///     .on(|_: NotFound| 404)
    ///     .otherwise(|_| 500);
    /// assert_eq!(status, 404);
    /// ```
    pub fn dispatch<R, S>(self, on_success: S) -> Dispatch<F, R>
    where
        S: FnOnce(T) -> R,
    {
        match self {
            Self::Success(value) => Dispatch::handled(on_success(value)),
            Self::Failure(failure) => Dispatch::pending(failure),
        }
    }

    /// Transform the success payload, passing failures through untouched.
    pub fn map<U, M>(self, f: M) -> TypedResult<U, F>
    where
        M: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => TypedResult::Success(f(value)),
            Self::Failure(failure) => TypedResult::Failure(failure),
        }
    }

    /// Chain an operation that may itself fail.
    ///
    /// Failures short-circuit: `f` is not called and the original failure is
    /// returned unchanged.
    pub fn and_then<U, B>(self, f: B) -> TypedResult<U, F>
    where
        B: FnOnce(T) -> TypedResult<U, F>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(failure) => TypedResult::Failure(failure),
        }
    }

    /// Move the failure into a larger set that embeds `F`.
    ///
    /// The held variant and its payload are preserved; only the enclosing
    /// set changes.
    pub fn widen<G>(self) -> TypedResult<T, G>
    where
        G: VariantSet + From<F>,
    {
        match self {
            Self::Success(value) => TypedResult::Success(value),
            Self::Failure(failure) => TypedResult::Failure(G::from(failure)),
        }
    }

    /// Take the success payload, discarding a failure.
    #[must_use]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Take the failure, discarding a success payload.
    #[must_use]
    pub fn into_failure(self) -> Option<F> {
        match self {
            Self::Success(_) => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Take the success payload or compute one from the failure.
    pub fn success_or_else<E>(self, on_failure: E) -> T
    where
        E: FnOnce(F) -> T,
    {
        self.fold(|value| value, on_failure)
    }

    /// Convert into a standard [`Result`] so `?` can be used internally.
    ///
    /// # Errors
    ///
    /// Returns the held failure unchanged.
    pub fn into_result(self) -> Result<T, F> {
        self.into()
    }
}

impl<T, F> From<Result<T, F>> for TypedResult<T, F> {
    fn from(result: Result<T, F>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(failure) => Self::Failure(failure),
        }
    }
}

impl<T, F> From<TypedResult<T, F>> for Result<T, F> {
    fn from(result: TypedResult<T, F>) -> Self {
        match result {
            TypedResult::Success(value) => Ok(value),
            TypedResult::Failure(failure) => Err(failure),
        }
    }
}
