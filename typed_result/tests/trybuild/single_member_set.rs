//! A set with one member still compiles without catch-all arms.

use typed_result::{Member, NotFound, TypedResult, VariantSet};

#[derive(Debug, Clone, VariantSet)]
enum LookupFailure {
    NotFound(NotFound),
}

fn main() {
    let failure = LookupFailure::from(NotFound::new("no key"));
    assert!(NotFound::project(&failure).is_some());
    assert!(NotFound::try_from_set(failure).is_ok());

    let result: TypedResult<u8, LookupFailure> = TypedResult::failure(NotFound::new("no key"));
    let message = match result {
        TypedResult::Success(_) => String::new(),
        TypedResult::Failure(LookupFailure::NotFound(n)) => n.message().to_owned(),
    };
    assert_eq!(message, "no key");
    assert_eq!(LookupFailureKind::NotFound.to_string(), "NotFound");
}
