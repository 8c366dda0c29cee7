pub mod user_record_store;
