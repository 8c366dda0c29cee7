use crate::{CoreError, FieldValue, Fields};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_text_uuid_when_read_as_uuid_then_parses() {
    let id = Uuid::new_v4();
    let fields = Fields::new().with("id", id.to_string());

    assert_that!(fields.uuid("id"), ok(eq(&id)));
}

#[test]
fn given_malformed_uuid_when_read_then_uuid_error() {
    let fields = Fields::new().with("id", "not-a-uuid");

    let result = fields.uuid("id");

    assert!(matches!(result, Err(CoreError::Uuid { .. })));
}

#[test]
fn given_absent_or_null_field_when_read_as_required_then_missing_field() {
    let fields = Fields::new().with("email", FieldValue::Null);

    assert!(matches!(
        fields.string("email"),
        Err(CoreError::MissingField { .. })
    ));
    assert!(matches!(
        fields.string("hashed_password"),
        Err(CoreError::MissingField { .. })
    ));
}

#[test]
fn given_wrong_type_when_read_then_field_type_error() {
    let fields = Fields::new().with("is_active", "yes");

    let err = fields.bool("is_active").unwrap_err();

    assert_that!(err.to_string(), contains_substring("expected bool, got text"));
}

#[test]
fn given_absent_optional_fields_when_read_then_none() {
    let fields = Fields::new();

    assert_that!(fields.optional_string("refresh_token"), ok(none()));
    assert_that!(fields.optional_i64("expires_at"), ok(none()));
    assert_that!(fields.bool_or("is_verified", false), ok(eq(&false)));
}

#[test]
fn given_option_values_when_inserted_then_none_becomes_null() {
    let fields = Fields::new()
        .with("expires_at", Some(42_i64))
        .with("refresh_token", None::<String>);

    assert_that!(fields.get("expires_at"), some(eq(&FieldValue::Integer(42))));
    assert_that!(fields.get("refresh_token"), some(eq(&FieldValue::Null)));
    assert_that!(fields.len(), eq(2));
}
