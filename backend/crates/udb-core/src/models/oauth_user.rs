use crate::{Fields, OAuthAccount, Result as CoreErrorResult, User, UserRecord};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A [`User`] together with its linked OAuth accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OAuthUser {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub oauth_accounts: Vec<OAuthAccount>,
}

impl OAuthUser {
    pub fn new(user: User, oauth_accounts: Vec<OAuthAccount>) -> Self {
        Self {
            user,
            oauth_accounts,
        }
    }
}

impl UserRecord for OAuthUser {
    fn id(&self) -> Uuid {
        self.user.id
    }

    fn to_fields(&self) -> Fields {
        self.user.to_fields()
    }

    fn oauth_accounts(&self) -> Option<&[OAuthAccount]> {
        Some(&self.oauth_accounts)
    }

    fn from_fields(
        fields: Fields,
        oauth_accounts: Option<Vec<OAuthAccount>>,
    ) -> CoreErrorResult<Self> {
        Ok(Self {
            user: User::from_fields(fields, None)?,
            oauth_accounts: oauth_accounts.unwrap_or_default(),
        })
    }
}
