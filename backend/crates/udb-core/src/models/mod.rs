pub mod field_value;
pub mod fields;
pub mod oauth_account;
pub mod oauth_user;
pub mod user;
pub mod user_record;
