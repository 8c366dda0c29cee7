//! Column names shared by the record types and the table descriptors.

pub const ID: &str = "id";

// user
pub const EMAIL: &str = "email";
pub const HASHED_PASSWORD: &str = "hashed_password";
pub const IS_ACTIVE: &str = "is_active";
pub const IS_SUPERUSER: &str = "is_superuser";
pub const IS_VERIFIED: &str = "is_verified";

// oauth_account
pub const OAUTH_NAME: &str = "oauth_name";
pub const ACCESS_TOKEN: &str = "access_token";
pub const EXPIRES_AT: &str = "expires_at";
pub const REFRESH_TOKEN: &str = "refresh_token";
pub const ACCOUNT_ID: &str = "account_id";
pub const ACCOUNT_EMAIL: &str = "account_email";
pub const USER_ID: &str = "user_id";
