use crate::columns::{EMAIL, HASHED_PASSWORD, ID, IS_ACTIVE};
use crate::{FieldValue, Fields, User, UserRecord};

use googletest::prelude::*;

#[test]
fn test_user_new_defaults() {
    let user = User::new("lancelot@camelot.bt", "guinevere");

    assert_eq!(user.email, "lancelot@camelot.bt");
    assert_eq!(user.hashed_password, "guinevere");
    assert!(user.is_active);
    assert!(!user.is_superuser);
    assert!(!user.is_verified);
    assert!(user.oauth_accounts().is_none());
}

#[test]
fn test_user_fields_cover_every_base_column() {
    let user = User::new("lancelot@camelot.bt", "guinevere");

    let fields = user.to_fields();

    assert_that!(fields.len(), eq(6));
    assert_that!(fields.get(ID), some(eq(&FieldValue::Uuid(user.id))));
    assert_that!(fields.get(IS_ACTIVE), some(eq(&FieldValue::Bool(true))));
}

#[test]
fn test_user_from_fields_applies_flag_defaults() {
    let user = User::new("lancelot@camelot.bt", "guinevere");
    let fields = Fields::new()
        .with(ID, user.id)
        .with(EMAIL, "lancelot@camelot.bt")
        .with(HASHED_PASSWORD, "guinevere");

    let rebuilt = User::from_fields(fields, None).unwrap();

    assert_eq!(rebuilt, user);
}

#[test]
fn test_user_from_fields_requires_email() {
    let fields = Fields::new()
        .with(ID, uuid::Uuid::new_v4())
        .with(HASHED_PASSWORD, "guinevere");

    let result = User::from_fields(fields, None);

    assert_that!(result, err(anything()));
}
