//! Example HTTP-style adapter over a repository that returns typed outcomes.
//!
//! The repository never picks a status code. The adapter owns the table,
//! layered from `status_codes.toml` and `TYPED_RESULT_*` environment
//! variables, and renders failures as `{"kind": ..., "message": ...}`.

use std::collections::BTreeMap;
use std::error::Error;
use std::io::{self, Write};

use serde::Serialize;
use serde_json::json;
use typed_result::codes::providers;
use typed_result::{
    CodeMap, CodeMapError, Conflict, Failure, FailureKind, NotFound, TypedResult,
    ValidationFailed,
};

/// A stored user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    id: u32,
    email: String,
}

/// In-memory user store.
#[derive(Debug, Default)]
struct Users {
    by_id: BTreeMap<u32, User>,
}

impl Users {
    fn create(&mut self, id: u32, email: &str) -> TypedResult<User> {
        if !email.contains('@') {
            return TypedResult::failure(
                ValidationFailed::new("invalid user").with_violation("email", "must contain @"),
            );
        }
        if self.by_id.contains_key(&id) {
            return TypedResult::failure(Conflict::new(format!("user {id} already exists")));
        }
        let user = User {
            id,
            email: email.to_owned(),
        };
        self.by_id.insert(id, user.clone());
        TypedResult::success(user)
    }

    fn get(&self, id: u32) -> TypedResult<User> {
        self.by_id.get(&id).cloned().map_or_else(
            || TypedResult::failure(NotFound::new(format!("no user {id}"))),
            TypedResult::success,
        )
    }
}

/// A rendered response.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Response {
    status: u16,
    body: String,
}

fn respond<T: Serialize>(codes: &CodeMap<FailureKind>, result: &TypedResult<T>) -> Response {
    let status = codes.code_for(result);
    let body = match result {
        TypedResult::Success(value) => serde_json::to_string(value),
        TypedResult::Failure(failure) => serde_json::to_string(failure),
    }
    .unwrap_or_else(|err| internal_error_body(&err.to_string()));
    Response { status, body }
}

fn internal_error_body(detail: &str) -> String {
    json!({ "kind": "Internal", "message": detail }).to_string()
}

fn load_codes() -> Result<CodeMap<FailureKind>, CodeMapError> {
    CodeMap::default().merge_from(&providers("status_codes.toml"))
}

fn retry_hint(result: &TypedResult<User>) -> &'static str {
    match result.as_failure() {
        None => "none",
        Some(Failure::Conflict(_)) => "pick another id",
        Some(Failure::NotFound(_)) => "create the user first",
        Some(Failure::ValidationFailed(_)) => "fix the input",
        Some(Failure::Unauthorized(_) | Failure::Forbidden(_)) => "sign in",
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let codes = load_codes()?;
    let mut stdout = io::stdout().lock();
    let mut users = Users::default();

    let outcomes = [
        users.create(1, "ada@example.com"),
        users.create(1, "ada@example.com"),
        users.create(2, "grace"),
        users.get(1),
        users.get(9),
    ];

    for outcome in &outcomes {
        let Response { status, body } = respond(&codes, outcome);
        writeln!(stdout, "{status} {body} (hint: {})", retry_hint(outcome))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::Value;

    use super::*;

    fn body(response: &Response) -> Value {
        serde_json::from_str(&response.body).expect("body should be JSON")
    }

    #[rstest]
    fn created_users_render_as_success() {
        let mut users = Users::default();
        let response = respond(&CodeMap::default(), &users.create(1, "ada@example.com"));
        assert_eq!(response.status, 200);
        assert_eq!(body(&response), json!({ "id": 1, "email": "ada@example.com" }));
    }

    #[rstest]
    fn duplicate_users_render_as_conflict() {
        let mut users = Users::default();
        let first = users.create(1, "ada@example.com");
        assert!(first.is_success());
        let response = respond(&CodeMap::default(), &users.create(1, "ada@example.com"));
        assert_eq!(response.status, 409);
        assert_eq!(
            body(&response),
            json!({ "kind": "Conflict", "message": "user 1 already exists" })
        );
    }

    #[rstest]
    fn invalid_input_carries_violations() {
        let mut users = Users::default();
        let response = respond(&CodeMap::default(), &users.create(2, "grace"));
        assert_eq!(response.status, 422);
        assert_eq!(
            body(&response),
            json!({
                "kind": "ValidationFailed",
                "message": "invalid user",
                "violations": [{ "field": "email", "message": "must contain @" }]
            })
        );
    }

    #[rstest]
    fn unserialisable_payloads_render_escaped_json() {
        let mut by_pair = BTreeMap::new();
        by_pair.insert((1_u8, 2_u8), "pair");
        let response = respond(&CodeMap::default(), &TypedResult::success(by_pair));
        let value = body(&response);
        assert_eq!(value["kind"], "Internal");
        assert!(value["message"].as_str().is_some_and(|m| !m.is_empty()));
    }

    #[rstest]
    fn internal_bodies_escape_the_detail() {
        let detail = r#"bad "quote" and \ slash"#;
        let value: Value =
            serde_json::from_str(&internal_error_body(detail)).expect("body should be JSON");
        assert_eq!(value, json!({ "kind": "Internal", "message": detail }));
    }

    #[rstest]
    #[case(1, "none")]
    #[case(9, "create the user first")]
    fn hints_follow_the_variant(#[case] id: u32, #[case] hint: &str) {
        let mut users = Users::default();
        let created = users.create(1, "ada@example.com");
        assert!(created.is_success());
        assert_eq!(retry_hint(&users.get(id)), hint);
    }

    #[rstest]
    fn configured_codes_override_defaults() {
        figment::Jail::expect_with(|j| {
            j.set_env("TYPED_RESULT_CODES__NOT_FOUND", "410");
            let codes = load_codes().map_err(|e| figment::Error::from(e.to_string()))?;
            let response = respond(&codes, &Users::default().get(3));
            assert_eq!(response.status, 410);
            Ok(())
        });
    }
}
