//! Handler-per-variant dispatch with a mandatory fallback.
//!
//! [`crate::TypedResult::dispatch`] starts a [`Dispatch`] with the success
//! handler. Each [`Dispatch::on`] registers a handler for one member of the
//! failure set and [`Dispatch::otherwise`] closes the chain. The output is
//! only reachable through `otherwise`, so a chain without a fallback does not
//! produce a value:
//!
//! ```compile_fail
//! use typed_result::{Conflict, TypedResult};
//!
//! let result: TypedResult<u32> = TypedResult::failure(Conflict::new("dup"));
//! let code: u16 = result.dispatch(|_| 200).on(|_: Conflict| 409);
//! ```

use crate::{Member, VariantSet};

/// An in-progress dispatch over a failure set `F` producing `R`.
///
/// Exactly one handler runs per dispatch: the success handler, the first
/// `on` handler whose variant matches, or the fallback.
#[must_use = "a dispatch does nothing until it is closed with `otherwise`"]
#[derive(Debug)]
pub struct Dispatch<F, R> {
    slot: Slot<F, R>,
}

#[derive(Debug)]
enum Slot<F, R> {
    Handled(R),
    Pending(F),
}

impl<F: VariantSet, R> Dispatch<F, R> {
    pub(crate) const fn handled(output: R) -> Self {
        Self {
            slot: Slot::Handled(output),
        }
    }

    pub(crate) const fn pending(failure: F) -> Self {
        Self {
            slot: Slot::Pending(failure),
        }
    }

    /// Handle failures holding a `V`.
    ///
    /// `handler` runs only when no earlier handler has run and the failure
    /// holds a `V`; otherwise it is dropped without being called.
    pub fn on<V, H>(self, handler: H) -> Self
    where
        V: Member<F>,
        H: FnOnce(V) -> R,
    {
        match self.slot {
            Slot::Pending(failure) => match V::try_from_set(failure) {
                Ok(variant) => Self::handled(handler(variant)),
                Err(unmatched) => Self::pending(unmatched),
            },
            handled @ Slot::Handled(_) => Self { slot: handled },
        }
    }

    /// Close the dispatch, running `fallback` when no handler matched.
    pub fn otherwise<H>(self, fallback: H) -> R
    where
        H: FnOnce(F) -> R,
    {
        match self.slot {
            Slot::Handled(output) => output,
            Slot::Pending(failure) => {
                tracing::debug!(
                    kind = %failure.kind(),
                    "no dispatch handler matched; running fallback"
                );
                fallback(failure)
            }
        }
    }

    /// Returns `true` once a handler has produced the output.
    #[must_use]
    pub const fn is_handled(&self) -> bool {
        matches!(self.slot, Slot::Handled(_))
    }
}
