use crate::schema::quote_ident;
use crate::values::{SqlValue, push_value};
use crate::{DbError, OAuthAccountTable, Result as DbErrorResult, TableDef, UserTable, guid};

use udb_core::columns::{ACCOUNT_ID, EMAIL, ID, OAUTH_NAME, USER_ID};
use udb_core::{FieldValue, Fields, OAuthAccount, UserRecord};

use std::marker::PhantomData;

use log::{debug, warn};
use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use uuid::Uuid;

/// Whether this store was built with an OAuth account table.
#[derive(Debug, Clone)]
enum OAuthSupport {
    Disabled,
    Enabled(OAuthAccountTable),
}

/// Persists `R` records in a user table and, optionally, their linked OAuth
/// accounts in an OAuth account table.
///
/// Each mutating call runs in its own transaction. Reads always hit the
/// database; nothing is cached between calls.
pub struct UserRecordStore<R> {
    pool: SqlitePool,
    users: UserTable,
    oauth: OAuthSupport,
    _record: PhantomData<fn() -> R>,
}

impl<R: UserRecord> UserRecordStore<R> {
    /// A store without OAuth support. OAuth lookups and records carrying OAuth
    /// accounts fail with [`DbError::FeatureNotConfigured`].
    pub fn new(pool: SqlitePool, users: UserTable) -> Self {
        Self {
            pool,
            users,
            oauth: OAuthSupport::Disabled,
            _record: PhantomData,
        }
    }

    /// A store that also persists and looks up OAuth accounts in `oauth_accounts`.
    pub fn with_oauth_accounts(
        pool: SqlitePool,
        users: UserTable,
        oauth_accounts: OAuthAccountTable,
    ) -> Self {
        Self {
            pool,
            users,
            oauth: OAuthSupport::Enabled(oauth_accounts),
            _record: PhantomData,
        }
    }

    pub fn has_oauth_accounts(&self) -> bool {
        matches!(self.oauth, OAuthSupport::Enabled(_))
    }

    #[track_caller]
    fn oauth_table(&self) -> DbErrorResult<&OAuthAccountTable> {
        match &self.oauth {
            OAuthSupport::Enabled(table) => Ok(table),
            OAuthSupport::Disabled => {
                warn!(
                    "OAuth account operation on {} without an OAuth account table",
                    self.users.table().name()
                );
                Err(DbError::feature_not_configured())
            }
        }
    }

    pub async fn get(&self, id: Uuid) -> DbErrorResult<Option<R>> {
        debug!("Fetching user by id {}", id);

        let users = self.users.table();
        let mut query = select_from(users);
        query
            .push(" WHERE ")
            .push(users.qualified(ID))
            .push(" = ")
            .push_bind(guid::encode(id));

        let row = query.build().fetch_optional(&self.pool).await?;

        match row {
            Some(row) => Ok(Some(self.make_user(users.decode_row(&row)?).await?)),
            None => Ok(None),
        }
    }

    /// Case-insensitive on both sides.
    pub async fn get_by_email(&self, email: &str) -> DbErrorResult<Option<R>> {
        debug!("Fetching user by email");

        let users = self.users.table();
        let mut query = select_from(users);
        query
            .push(" WHERE lower(")
            .push(users.qualified(EMAIL))
            .push(") = lower(")
            .push_bind(email.to_string())
            .push(")");

        let row = query.build().fetch_optional(&self.pool).await?;

        match row {
            Some(row) => Ok(Some(self.make_user(users.decode_row(&row)?).await?)),
            None => Ok(None),
        }
    }

    /// Exact match on provider name and provider-side account id. The
    /// returned user carries all of its OAuth accounts, not only the match.
    pub async fn get_by_oauth_account(
        &self,
        oauth_name: &str,
        account_id: &str,
    ) -> DbErrorResult<Option<R>> {
        let oauth = self.oauth_table()?.table();
        debug!("Fetching user by OAuth account {}/{}", oauth_name, account_id);

        let users = self.users.table();
        let mut query = select_from(users);
        query
            .push(" JOIN ")
            .push(oauth.quoted_name())
            .push(" ON ")
            .push(oauth.qualified(USER_ID))
            .push(" = ")
            .push(users.qualified(ID))
            .push(" WHERE ")
            .push(oauth.qualified(OAUTH_NAME))
            .push(" = ")
            .push_bind(oauth_name.to_string())
            .push(" AND ")
            .push(oauth.qualified(ACCOUNT_ID))
            .push(" = ")
            .push_bind(account_id.to_string())
            .push(" LIMIT 1");

        let row = query.build().fetch_optional(&self.pool).await?;

        match row {
            Some(row) => Ok(Some(self.make_user(users.decode_row(&row)?).await?)),
            None => Ok(None),
        }
    }

    /// Inserts the user row and, if the record carries any, its OAuth
    /// accounts, in one transaction. Returns the record unchanged.
    pub async fn create(&self, user: R) -> DbErrorResult<R> {
        let user_id = user.id();
        debug!("Creating user {}", user_id);

        // Checked before anything is written
        let oauth = match user.oauth_accounts() {
            Some(accounts) => Some((self.oauth_table()?.table(), accounts)),
            None => None,
        };

        let user_values = self.users.table().encode_fields(&user.to_fields())?;

        let mut tx = self.pool.begin().await?;

        insert_row(&mut tx, self.users.table(), user_values).await?;

        if let Some((table, accounts)) = oauth {
            insert_oauth_accounts(&mut tx, table, user_id, accounts).await?;
        }

        tx.commit().await?;

        Ok(user)
    }

    /// Rewrites the user row by primary key. If the record carries OAuth
    /// accounts, the stored set is replaced wholesale by the record's list.
    /// Returns the record unchanged.
    pub async fn update(&self, user: R) -> DbErrorResult<R> {
        let user_id = user.id();
        debug!("Updating user {}", user_id);

        let oauth = match user.oauth_accounts() {
            Some(accounts) => Some((self.oauth_table()?.table(), accounts)),
            None => None,
        };

        let mut fields = user.to_fields();
        fields.remove(ID);
        let user_values = self.users.table().encode_fields(&fields)?;

        let mut tx = self.pool.begin().await?;

        if let Some((table, accounts)) = oauth {
            let mut delete = QueryBuilder::<Sqlite>::new("DELETE FROM ");
            delete
                .push(table.quoted_name())
                .push(" WHERE ")
                .push(quote_ident(USER_ID))
                .push(" = ")
                .push_bind(guid::encode(user_id));
            delete.build().execute(&mut *tx).await?;

            insert_oauth_accounts(&mut tx, table, user_id, accounts).await?;
        }

        if !user_values.is_empty() {
            let users = self.users.table();
            let mut query = QueryBuilder::<Sqlite>::new("UPDATE ");
            query.push(users.quoted_name()).push(" SET ");
            for (i, (column, value)) in user_values.into_iter().enumerate() {
                if i > 0 {
                    query.push(", ");
                }
                query.push(quote_ident(&column)).push(" = ");
                push_value(&mut query, value);
            }
            query
                .push(" WHERE ")
                .push(quote_ident(ID))
                .push(" = ")
                .push_bind(guid::encode(user_id));
            query.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;

        Ok(user)
    }

    /// Deletes the user row. OAuth account rows are removed by the
    /// `ON DELETE CASCADE` foreign key, not here.
    pub async fn delete(&self, user: &R) -> DbErrorResult<()> {
        let user_id = user.id();
        debug!("Deleting user {}", user_id);

        let users = self.users.table();
        let mut query = QueryBuilder::<Sqlite>::new("DELETE FROM ");
        query
            .push(users.quoted_name())
            .push(" WHERE ")
            .push(quote_ident(ID))
            .push(" = ")
            .push_bind(guid::encode(user_id));
        query.build().execute(&self.pool).await?;

        Ok(())
    }

    async fn make_user(&self, fields: Fields) -> DbErrorResult<R> {
        let oauth_accounts = match &self.oauth {
            OAuthSupport::Enabled(table) => {
                let user_id = fields.uuid(ID)?;
                Some(self.fetch_oauth_accounts(table.table(), user_id).await?)
            }
            OAuthSupport::Disabled => None,
        };

        Ok(R::from_fields(fields, oauth_accounts)?)
    }

    /// Accounts in insertion order.
    async fn fetch_oauth_accounts(
        &self,
        oauth: &TableDef,
        user_id: Uuid,
    ) -> DbErrorResult<Vec<OAuthAccount>> {
        let mut query = select_from(oauth);
        query
            .push(" WHERE ")
            .push(oauth.qualified(USER_ID))
            .push(" = ")
            .push_bind(guid::encode(user_id))
            .push(" ORDER BY ")
            .push(oauth.quoted_name())
            .push(".rowid");

        let rows = query.build().fetch_all(&self.pool).await?;

        rows.iter()
            .map(|row| -> DbErrorResult<OAuthAccount> {
                Ok(OAuthAccount::from_fields(&oauth.decode_row(row)?)?)
            })
            .collect()
    }
}

fn select_from(table: &TableDef) -> QueryBuilder<'static, Sqlite> {
    QueryBuilder::new(format!(
        "SELECT {} FROM {}",
        table.select_list(),
        table.quoted_name()
    ))
}

async fn insert_row(
    conn: &mut SqliteConnection,
    table: &TableDef,
    values: Vec<(String, SqlValue)>,
) -> DbErrorResult<()> {
    let mut query = QueryBuilder::<Sqlite>::new("INSERT INTO ");
    query.push(table.quoted_name());

    if values.is_empty() {
        query.push(" DEFAULT VALUES");
    } else {
        let columns = values
            .iter()
            .map(|(column, _)| quote_ident(column))
            .collect::<Vec<_>>()
            .join(", ");
        query.push(" (").push(columns).push(") VALUES (");
        for (i, (_, value)) in values.into_iter().enumerate() {
            if i > 0 {
                query.push(", ");
            }
            push_value(&mut query, value);
        }
        query.push(")");
    }

    query.build().execute(&mut *conn).await?;

    Ok(())
}

async fn insert_oauth_accounts(
    conn: &mut SqliteConnection,
    table: &TableDef,
    user_id: Uuid,
    accounts: &[OAuthAccount],
) -> DbErrorResult<()> {
    for account in accounts {
        let mut fields = account.to_fields();
        fields.insert(USER_ID, FieldValue::Uuid(user_id));
        let values = table.encode_fields(&fields)?;
        insert_row(conn, table, values).await?;
    }

    Ok(())
}
