use crate::columns::{
    ACCESS_TOKEN, ACCOUNT_EMAIL, ACCOUNT_ID, EXPIRES_AT, ID, OAUTH_NAME, REFRESH_TOKEN,
};
use crate::{Fields, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An external identity-provider account linked to a user.
///
/// The owning user's id is not part of the value; the store fills in
/// `user_id` when it writes the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthAccount {
    pub id: Uuid,
    pub oauth_name: String,
    pub access_token: String,
    pub expires_at: Option<i64>,
    pub refresh_token: Option<String>,
    pub account_id: String,
    pub account_email: String,
}

impl OAuthAccount {
    pub fn new(
        oauth_name: impl Into<String>,
        access_token: impl Into<String>,
        account_id: impl Into<String>,
        account_email: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            oauth_name: oauth_name.into(),
            access_token: access_token.into(),
            expires_at: None,
            refresh_token: None,
            account_id: account_id.into(),
            account_email: account_email.into(),
        }
    }

    pub fn to_fields(&self) -> Fields {
        Fields::new()
            .with(ID, self.id)
            .with(OAUTH_NAME, self.oauth_name.as_str())
            .with(ACCESS_TOKEN, self.access_token.as_str())
            .with(EXPIRES_AT, self.expires_at)
            .with(REFRESH_TOKEN, self.refresh_token.clone())
            .with(ACCOUNT_ID, self.account_id.as_str())
            .with(ACCOUNT_EMAIL, self.account_email.as_str())
    }

    pub fn from_fields(fields: &Fields) -> CoreErrorResult<Self> {
        Ok(Self {
            id: fields.uuid(ID)?,
            oauth_name: fields.string(OAUTH_NAME)?,
            access_token: fields.string(ACCESS_TOKEN)?,
            expires_at: fields.optional_i64(EXPIRES_AT)?,
            refresh_token: fields.optional_string(REFRESH_TOKEN)?,
            account_id: fields.string(ACCOUNT_ID)?,
            account_email: fields.string(ACCOUNT_EMAIL)?,
        })
    }
}
