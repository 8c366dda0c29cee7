use udb_core::columns::{EMAIL, ID};
use udb_core::{Fields, OAuthAccount, OAuthUser, Result as CoreResult, User, UserRecord};

use uuid::Uuid;

pub const FIRST_NAME: &str = "first_name";

/// A user record with one application-declared column
#[derive(Debug, Clone, PartialEq)]
pub struct KnightUser {
    pub user: User,
    pub first_name: Option<String>,
}

impl KnightUser {
    pub fn new(email: &str, first_name: Option<&str>) -> Self {
        Self {
            user: User::new(email, "guinevere"),
            first_name: first_name.map(str::to_string),
        }
    }
}

impl UserRecord for KnightUser {
    fn id(&self) -> Uuid {
        self.user.id
    }

    fn to_fields(&self) -> Fields {
        self.user
            .to_fields()
            .with(FIRST_NAME, self.first_name.clone())
    }

    fn from_fields(fields: Fields, _oauth_accounts: Option<Vec<OAuthAccount>>) -> CoreResult<Self> {
        let first_name = fields.optional_string(FIRST_NAME)?;
        Ok(Self {
            user: User::from_fields(fields, None)?,
            first_name,
        })
    }
}

/// A record that never supplies a hashed password
#[derive(Debug, Clone)]
pub struct PasswordlessUser {
    pub id: Uuid,
    pub email: String,
}

impl UserRecord for PasswordlessUser {
    fn id(&self) -> Uuid {
        self.id
    }

    fn to_fields(&self) -> Fields {
        Fields::new()
            .with(ID, self.id)
            .with(EMAIL, self.email.as_str())
    }

    fn from_fields(fields: Fields, _oauth_accounts: Option<Vec<OAuthAccount>>) -> CoreResult<Self> {
        Ok(Self {
            id: fields.uuid(ID)?,
            email: fields.string(EMAIL)?,
        })
    }
}

pub fn create_oauth_account1() -> OAuthAccount {
    OAuthAccount {
        expires_at: Some(1_579_000_751),
        ..OAuthAccount::new("service1", "TOKEN", "user_oauth1", "king.arthur@camelot.bt")
    }
}

pub fn create_oauth_account2() -> OAuthAccount {
    OAuthAccount {
        expires_at: Some(1_579_000_751),
        refresh_token: Some("REFRESH".to_string()),
        ..OAuthAccount::new("service2", "TOKEN", "user_oauth2", "king.arthur@camelot.bt")
    }
}

pub fn create_test_user() -> User {
    User::new("lancelot@camelot.bt", "guinevere")
}

pub fn create_test_oauth_user(oauth_accounts: Vec<OAuthAccount>) -> OAuthUser {
    OAuthUser::new(create_test_user(), oauth_accounts)
}
