use crate::columns::{EMAIL, HASHED_PASSWORD, ID, IS_ACTIVE, IS_SUPERUSER, IS_VERIFIED};
use crate::{Fields, OAuthAccount, Result as CoreErrorResult, UserRecord};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub hashed_password: String,

    pub is_active: bool,
    pub is_superuser: bool,
    pub is_verified: bool,
}

impl User {
    pub fn new(email: impl Into<String>, hashed_password: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            hashed_password: hashed_password.into(),
            is_active: true,
            is_superuser: false,
            is_verified: false,
        }
    }
}

impl UserRecord for User {
    fn id(&self) -> Uuid {
        self.id
    }

    fn to_fields(&self) -> Fields {
        Fields::new()
            .with(ID, self.id)
            .with(EMAIL, self.email.as_str())
            .with(HASHED_PASSWORD, self.hashed_password.as_str())
            .with(IS_ACTIVE, self.is_active)
            .with(IS_SUPERUSER, self.is_superuser)
            .with(IS_VERIFIED, self.is_verified)
    }

    fn from_fields(
        fields: Fields,
        _oauth_accounts: Option<Vec<OAuthAccount>>,
    ) -> CoreErrorResult<Self> {
        Ok(Self {
            id: fields.uuid(ID)?,
            email: fields.string(EMAIL)?,
            hashed_password: fields.string(HASHED_PASSWORD)?,
            is_active: fields.bool_or(IS_ACTIVE, true)?,
            is_superuser: fields.bool_or(IS_SUPERUSER, false)?,
            is_verified: fields.bool_or(IS_VERIFIED, false)?,
        })
    }
}
