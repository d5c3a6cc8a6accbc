//! The default closed failure set.

use thiserror::Error;

use crate::{Conflict, Forbidden, NotFound, Unauthorized, ValidationFailed, VariantSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The built-in closed set of failure variants.
///
/// This is the default failure set of [`crate::TypedResult`]. It is not
/// `#[non_exhaustive]`: a `match` on it must name every member.
///
/// With the `serde` feature the set is internally tagged by kind:
///
/// ```
/// # #[cfg(feature = "serde")] {
/// use typed_result::{Conflict, Failure};
///
/// let json = serde_json::to_string(&Failure::from(Conflict::new("dup key"))).unwrap();
/// assert_eq!(json, r#"{"kind":"Conflict","message":"dup key"}"#);
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, VariantSet)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum Failure {
    /// See [`Conflict`].
    #[error(transparent)]
    Conflict(Conflict),
    /// See [`NotFound`].
    #[error(transparent)]
    NotFound(NotFound),
    /// See [`ValidationFailed`].
    #[error(transparent)]
    ValidationFailed(ValidationFailed),
    /// See [`Unauthorized`].
    #[error(transparent)]
    Unauthorized(Unauthorized),
    /// See [`Forbidden`].
    #[error(transparent)]
    Forbidden(Forbidden),
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{Kind, Member, Variant};

    #[rstest]
    #[case(Failure::from(Conflict::new("m")), FailureKind::Conflict)]
    #[case(Failure::from(NotFound::new("m")), FailureKind::NotFound)]
    #[case(Failure::from(ValidationFailed::new("m")), FailureKind::ValidationFailed)]
    #[case(Failure::from(Unauthorized::new("m")), FailureKind::Unauthorized)]
    #[case(Failure::from(Forbidden::new("m")), FailureKind::Forbidden)]
    fn kind_tracks_the_wrapped_variant(#[case] failure: Failure, #[case] expected: FailureKind) {
        assert_eq!(failure.kind(), expected);
        assert_eq!(failure.kind().to_string(), expected.name());
        assert_eq!(failure.message(), "m");
    }

    #[rstest]
    #[case(<Conflict as Variant>::KIND, <Conflict as Member<Failure>>::KIND_IN_SET)]
    #[case(<NotFound as Variant>::KIND, <NotFound as Member<Failure>>::KIND_IN_SET)]
    #[case(
        <ValidationFailed as Variant>::KIND,
        <ValidationFailed as Member<Failure>>::KIND_IN_SET
    )]
    #[case(
        <Unauthorized as Variant>::KIND,
        <Unauthorized as Member<Failure>>::KIND_IN_SET
    )]
    #[case(<Forbidden as Variant>::KIND, <Forbidden as Member<Failure>>::KIND_IN_SET)]
    fn variant_kind_is_the_set_discriminant(#[case] declared: &str, #[case] kind: FailureKind) {
        assert_eq!(declared, kind.name());
    }

    #[rstest]
    fn kind_names_round_trip() {
        for kind in FailureKind::ALL {
            assert_eq!(kind.name().parse::<FailureKind>(), Ok(*kind));
        }
        assert_eq!(FailureKind::ALL.len(), 5);
    }

    #[rstest]
    #[case("conflict")]
    #[case("")]
    #[case("Teapot")]
    fn unknown_kind_names_are_rejected(#[case] name: &str) {
        let err = name
            .parse::<FailureKind>()
            .expect_err("name should not parse");
        assert_eq!(err.name(), name);
    }

    #[rstest]
    fn membership_projects_only_the_held_variant() {
        let failure = Failure::from(Conflict::new("dup key"));
        assert_eq!(
            Conflict::project(&failure).map(Conflict::message),
            Some("dup key")
        );
        assert!(NotFound::project(&failure).is_none());
        assert_eq!(
            <Conflict as Member<Failure>>::KIND_IN_SET,
            FailureKind::Conflict
        );
    }

    #[rstest]
    fn try_from_set_returns_the_set_on_mismatch() {
        let failure = Failure::from(Forbidden::new("admins only"));
        let back = NotFound::try_from_set(failure.clone()).expect_err("not a NotFound");
        assert_eq!(back, failure);
        let forbidden = Forbidden::try_from_set(back).expect("a Forbidden");
        assert_eq!(forbidden.message(), "admins only");
    }

    #[rstest]
    fn predicates_follow_snake_case_names() {
        let failure = Failure::from(ValidationFailed::new("bad"));
        assert!(failure.is_validation_failed());
        assert!(!failure.is_conflict());
    }

    #[rstest]
    fn display_delegates_to_the_variant() {
        let failure = Failure::from(Unauthorized::new("token expired"));
        assert_eq!(failure.to_string(), "token expired");
    }
}
