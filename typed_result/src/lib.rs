//! Closed, typed outcome values with exhaustive dispatch.
//!
//! An operation returns a [`TypedResult`]: either a success payload or one
//! member of a closed set of failure variants such as [`Conflict`] or
//! [`NotFound`]. Failures are ordinary data. They flow through [`map`] and
//! [`and_then`] untouched and are consumed by an exhaustive `match`,
//! [`fold`], or a [`Dispatch`] chain that must end in a fallback.
//!
//! Custom sets are declared with the [`Variant`](macro@Variant) and
//! [`VariantSet`](macro@VariantSet) derives:
//!
//! ```
//! use typed_result::{Conflict, TypedResult, Variant, VariantSet};
//!
//! #[derive(Debug, Clone, Variant)]
//! struct RateLimited {
//!     message: String,
//!     retry_after_secs: u32,
//! }
//!
//! #[derive(Debug, Clone, VariantSet)]
//! enum ApiFailure {
//!     Conflict(Conflict),
//!     RateLimited(RateLimited),
//! }
//!
//! let limited = RateLimited { message: "slow down".into(), retry_after_secs: 30 };
//! let result: TypedResult<(), ApiFailure> = TypedResult::failure(limited);
//! assert_eq!(result.failure_kind(), Some(ApiFailureKind::RateLimited));
//! assert_eq!(result.variant::<RateLimited>().map(|r| r.retry_after_secs), Some(30));
//! ```
//!
//! [`map`]: TypedResult::map
//! [`and_then`]: TypedResult::and_then
//! [`fold`]: TypedResult::fold

extern crate self as typed_result;

pub use typed_result_macros::{Variant, VariantSet};

pub mod codes;
mod dispatch;
mod error;
mod failure;
mod result;
mod variant;
mod variants;

pub use codes::CodeMap;
pub use dispatch::Dispatch;
pub use error::{CodeMapError, UnknownKind};
pub use failure::{Failure, FailureKind};
pub use result::{State, TypedResult};
pub use variant::{Kind, Member, Variant, VariantSet};
#[doc(hidden)]
pub use variant::kind_names_match;
pub use variants::{Conflict, Forbidden, NotFound, Unauthorized, ValidationFailed, Violation};
