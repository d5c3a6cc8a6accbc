//! The derives reach the runtime crate through a `crate = "..."` override.

use ::typed_result as outcomes;

#[derive(Debug, Clone, outcomes::Variant)]
#[variant(crate = "outcomes")]
struct Gone {
    message: String,
}

#[derive(Debug, Clone, outcomes::VariantSet)]
#[variant_set(crate = "outcomes")]
enum Lifecycle {
    Gone(Gone),
    Conflict(outcomes::Conflict),
}

fn main() {
    let result: outcomes::TypedResult<(), Lifecycle> = outcomes::TypedResult::failure(Gone {
        message: "archived".to_owned(),
    });
    assert_eq!(result.failure_kind(), Some(LifecycleKind::Gone));
    assert_eq!(result.message(), Some("archived"));
}
