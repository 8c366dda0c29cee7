use crate::{Result as DbErrorResult, UserRecordStore};

use udb_core::UserRecord;

use async_trait::async_trait;
use uuid::Uuid;

/// The user persistence contract an authentication layer programs against.
///
/// Lookups return `Ok(None)` on a miss. Backends without OAuth account
/// support answer OAuth operations with `DbError::FeatureNotConfigured`.
#[async_trait]
pub trait UserDatabase<R: UserRecord>: Send + Sync {
    async fn get(&self, id: Uuid) -> DbErrorResult<Option<R>>;

    async fn get_by_email(&self, email: &str) -> DbErrorResult<Option<R>>;

    async fn get_by_oauth_account(
        &self,
        oauth_name: &str,
        account_id: &str,
    ) -> DbErrorResult<Option<R>>;

    async fn create(&self, user: R) -> DbErrorResult<R>;

    async fn update(&self, user: R) -> DbErrorResult<R>;

    async fn delete(&self, user: &R) -> DbErrorResult<()>;
}

#[async_trait]
impl<R: UserRecord> UserDatabase<R> for UserRecordStore<R> {
    async fn get(&self, id: Uuid) -> DbErrorResult<Option<R>> {
        UserRecordStore::get(self, id).await
    }

    async fn get_by_email(&self, email: &str) -> DbErrorResult<Option<R>> {
        UserRecordStore::get_by_email(self, email).await
    }

    async fn get_by_oauth_account(
        &self,
        oauth_name: &str,
        account_id: &str,
    ) -> DbErrorResult<Option<R>> {
        UserRecordStore::get_by_oauth_account(self, oauth_name, account_id).await
    }

    async fn create(&self, user: R) -> DbErrorResult<R> {
        UserRecordStore::create(self, user).await
    }

    async fn update(&self, user: R) -> DbErrorResult<R> {
        UserRecordStore::update(self, user).await
    }

    async fn delete(&self, user: &R) -> DbErrorResult<()> {
        UserRecordStore::delete(self, user).await
    }
}
