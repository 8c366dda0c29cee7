mod fields;
mod oauth_user;
mod user;
