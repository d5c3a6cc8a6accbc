//! A public set exposes a public discriminant enum and predicates.

#![deny(missing_docs)]

use typed_result::{Conflict, Kind, TypedResult, Variant, VariantSet};

/// The quota for the account is exhausted.
#[derive(Debug, Clone, Variant)]
pub struct QuotaExceeded {
    message: String,
}

/// Failures of the billing API.
#[derive(Debug, Clone, VariantSet)]
pub enum BillingFailure {
    /// Duplicate invoice number.
    Conflict(Conflict),
    /// Out of quota.
    QuotaExceeded(QuotaExceeded),
}

fn main() {
    let result: TypedResult<u32, BillingFailure> = TypedResult::failure(QuotaExceeded {
        message: "monthly quota used".to_owned(),
    });
    assert_eq!(result.failure_kind(), Some(BillingFailureKind::QuotaExceeded));
    assert_eq!(BillingFailureKind::ALL.len(), 2);
    assert!(result.as_failure().is_some_and(BillingFailure::is_quota_exceeded));
}
