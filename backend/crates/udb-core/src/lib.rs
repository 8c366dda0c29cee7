pub mod columns;
pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::field_value::FieldValue;
pub use models::fields::Fields;
pub use models::oauth_account::OAuthAccount;
pub use models::oauth_user::OAuthUser;
pub use models::user::User;
pub use models::user_record::UserRecord;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;
