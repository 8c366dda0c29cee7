use crate::{Fields, OAuthAccount, Result as CoreErrorResult};

use uuid::Uuid;

/// Contract between the user store and the value type it produces.
///
/// The store never inspects a record directly: it writes whatever
/// [`to_fields`](UserRecord::to_fields) returns and rebuilds records through
/// [`from_fields`](UserRecord::from_fields). Extra columns declared on the
/// user table flow through these two methods unchanged.
pub trait UserRecord: Sized + Send + Sync + 'static {
    fn id(&self) -> Uuid;

    /// Column values for the user row. Linked OAuth accounts are not included.
    fn to_fields(&self) -> Fields;

    /// Linked OAuth accounts carried by this record.
    ///
    /// `None` means the record type has no notion of OAuth accounts at all,
    /// which is different from `Some(&[])`: the latter still requires an
    /// OAuth account table on create and update.
    fn oauth_accounts(&self) -> Option<&[OAuthAccount]> {
        None
    }

    /// Rebuilds a record from a user row. `oauth_accounts` is `Some` exactly
    /// when the store has an OAuth account table configured.
    fn from_fields(
        fields: Fields,
        oauth_accounts: Option<Vec<OAuthAccount>>,
    ) -> CoreErrorResult<Self>;
}
