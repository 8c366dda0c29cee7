use crate::{OAuthAccount, OAuthUser, User, UserRecord};

use googletest::prelude::*;

fn account(name: &str) -> OAuthAccount {
    OAuthAccount::new(name, "TOKEN", format!("{name}-user"), "king.arthur@camelot.bt")
}

#[test]
fn test_oauth_user_exposes_accounts_even_when_empty() {
    let user = OAuthUser::new(User::new("lancelot@camelot.bt", "guinevere"), vec![]);

    assert!(matches!(user.oauth_accounts(), Some(accounts) if accounts.is_empty()));
}

#[test]
fn test_oauth_user_fields_exclude_accounts() {
    let user = OAuthUser::new(
        User::new("lancelot@camelot.bt", "guinevere"),
        vec![account("service1")],
    );

    let fields = user.to_fields();

    assert!(!fields.contains("oauth_accounts"));
    assert_that!(fields, eq(&user.user.to_fields()));
}

#[test]
fn test_oauth_user_from_fields_without_table_defaults_to_empty() {
    let user = OAuthUser::new(
        User::new("lancelot@camelot.bt", "guinevere"),
        vec![account("service1")],
    );

    let rebuilt = OAuthUser::from_fields(user.to_fields(), None).unwrap();

    assert_that!(rebuilt.oauth_accounts, is_empty());
    assert_that!(rebuilt.user, eq(&user.user));
}

#[test]
fn test_oauth_account_round_trips_through_fields() {
    let mut original = account("service2");
    original.expires_at = Some(1_579_000_751);
    original.refresh_token = Some("REFRESH".to_string());

    let rebuilt = OAuthAccount::from_fields(&original.to_fields()).unwrap();

    assert_that!(rebuilt, eq(&original));
}

#[test]
fn test_oauth_user_serializes_user_fields_flat() {
    let user = OAuthUser::new(
        User::new("lancelot@camelot.bt", "guinevere"),
        vec![account("service1")],
    );

    let json = serde_json::to_value(&user).unwrap();

    assert_that!(json["email"], eq(&serde_json::json!("lancelot@camelot.bt")));
    assert_that!(json["oauth_accounts"][0]["oauth_name"], eq(&serde_json::json!("service1")));
    assert!(json.get("user").is_none());
}
