use crate::guid;
use crate::schema::quote_ident;

use udb_core::FieldValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// UUID stored as CHAR(36)
    Guid,
    /// `max_length: None` renders as unbounded TEXT
    Text { max_length: Option<u32> },
    Boolean,
    Integer,
}

impl ColumnKind {
    pub fn sql_type(&self) -> String {
        match self {
            Self::Guid => guid::SQL_TYPE.to_string(),
            Self::Text {
                max_length: Some(len),
            } => format!("VARCHAR({len})"),
            Self::Text { max_length: None } => "TEXT".to_string(),
            Self::Boolean => "BOOLEAN".to_string(),
            Self::Integer => "INTEGER".to_string(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Guid => "uuid",
            Self::Text { .. } => "text",
            Self::Boolean => "bool",
            Self::Integer => "integer",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub table: String,
    pub column: String,
    pub on_delete_cascade: bool,
}

/// Declarative column definition used both for DDL and for mapping
/// [`FieldValue`]s to statement parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: String,
    pub kind: ColumnKind,
    pub primary_key: bool,
    pub nullable: bool,
    pub unique: bool,
    pub indexed: bool,
    /// Compare with `COLLATE NOCASE`, which also makes `unique` case-insensitive
    pub case_insensitive: bool,
    pub default: Option<FieldValue>,
    pub references: Option<ForeignKey>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
            primary_key: false,
            nullable: true,
            unique: false,
            indexed: false,
            case_insensitive: false,
            default: None,
            references: None,
        }
    }

    pub fn guid(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Guid)
    }

    pub fn varchar(name: impl Into<String>, max_length: u32) -> Self {
        Self::new(
            name,
            ColumnKind::Text {
                max_length: Some(max_length),
            },
        )
    }

    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Text { max_length: None })
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Boolean)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Integer)
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn indexed(mut self) -> Self {
        self.indexed = true;
        self
    }

    pub fn case_insensitive(mut self) -> Self {
        self.case_insensitive = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn references(
        mut self,
        table: impl Into<String>,
        column: impl Into<String>,
        on_delete_cascade: bool,
    ) -> Self {
        self.references = Some(ForeignKey {
            table: table.into(),
            column: column.into(),
            on_delete_cascade,
        });
        self
    }

    /// Column definition as it appears inside `CREATE TABLE (...)`.
    pub fn definition_sql(&self) -> String {
        let mut sql = format!("{} {}", quote_ident(&self.name), self.kind.sql_type());

        if !self.nullable {
            sql.push_str(" NOT NULL");
        }
        if self.primary_key {
            sql.push_str(" PRIMARY KEY");
        }
        if self.case_insensitive {
            sql.push_str(" COLLATE NOCASE");
        }
        if self.unique {
            sql.push_str(" UNIQUE");
        }
        if let Some(default) = &self.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(&literal(default));
        }
        if let Some(fk) = &self.references {
            sql.push_str(&format!(
                " REFERENCES {} ({})",
                quote_ident(&fk.table),
                quote_ident(&fk.column)
            ));
            if fk.on_delete_cascade {
                sql.push_str(" ON DELETE CASCADE");
            }
        }

        sql
    }
}

fn literal(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => "NULL".to_string(),
        FieldValue::Bool(flag) => if *flag { "1" } else { "0" }.to_string(),
        FieldValue::Integer(n) => n.to_string(),
        FieldValue::Text(text) => format!("'{}'", text.replace('\'', "''")),
        FieldValue::Uuid(id) => format!("'{}'", guid::encode(*id)),
    }
}
