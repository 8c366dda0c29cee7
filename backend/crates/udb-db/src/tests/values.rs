use crate::values::SqlValue;
use crate::{ColumnDef, DbError, UserTable};

use udb_core::{FieldValue, Fields};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_uuid_text_when_encoding_guid_column_then_normalized() {
    let column = ColumnDef::guid("id");
    let id = Uuid::new_v4();
    let upper = FieldValue::Text(id.to_string().to_uppercase());

    let encoded = column.encode("user", &upper).unwrap();

    assert_that!(encoded, eq(&SqlValue::Text(id.to_string())));
}

#[test]
fn given_null_when_encoding_any_column_then_null_passes_through() {
    let column = ColumnDef::varchar("hashed_password", 72).not_null();

    let encoded = column.encode("user", &FieldValue::Null).unwrap();

    assert_that!(encoded, eq(&SqlValue::Null));
}

#[test]
fn given_mismatched_type_when_encoding_then_column_type_error() {
    let column = ColumnDef::boolean("is_active");

    let result = column.encode("user", &FieldValue::Text("yes".to_string()));

    assert!(matches!(
        result,
        Err(DbError::ColumnType {
            expected: "bool",
            actual: "text",
            ..
        })
    ));
}

#[test]
fn given_undeclared_field_when_encoding_fields_then_unknown_column_error() {
    let users = UserTable::new();
    let fields = Fields::new()
        .with("email", "lancelot@camelot.bt")
        .with("first_name", "Lancelot");

    let result = users.table().encode_fields(&fields);

    assert!(matches!(
        result,
        Err(DbError::UnknownColumn { ref column, .. }) if column == "first_name"
    ));
}
