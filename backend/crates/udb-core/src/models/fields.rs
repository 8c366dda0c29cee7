use crate::{CoreError, FieldValue, Result as CoreErrorResult};

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Flat column name -> value mapping exchanged between the store and a
/// [`UserRecord`](crate::UserRecord).
///
/// Absent keys and [`FieldValue::Null`] are distinct: an absent key is left
/// out of INSERT/UPDATE statements entirely, so column defaults apply.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(BTreeMap<String, FieldValue>);

impl Fields {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, FieldValue> {
        self.0.iter()
    }

    #[track_caller]
    fn required(&self, name: &str) -> CoreErrorResult<&FieldValue> {
        match self.0.get(name) {
            Some(value) if !value.is_null() => Ok(value),
            _ => Err(CoreError::missing_field(name)),
        }
    }

    /// Reads a UUID, accepting either a native UUID or its string form.
    #[track_caller]
    pub fn uuid(&self, name: &str) -> CoreErrorResult<Uuid> {
        match self.required(name)? {
            FieldValue::Uuid(id) => Ok(*id),
            FieldValue::Text(text) => Uuid::parse_str(text).map_err(|e| CoreError::Uuid {
                field: name.to_string(),
                source: e,
                location: ErrorLocation::from(Location::caller()),
            }),
            other => Err(CoreError::field_type(name, "uuid", other.type_name())),
        }
    }

    #[track_caller]
    pub fn string(&self, name: &str) -> CoreErrorResult<String> {
        match self.required(name)? {
            FieldValue::Text(text) => Ok(text.clone()),
            other => Err(CoreError::field_type(name, "text", other.type_name())),
        }
    }

    #[track_caller]
    pub fn optional_string(&self, name: &str) -> CoreErrorResult<Option<String>> {
        match self.0.get(name) {
            None | Some(FieldValue::Null) => Ok(None),
            Some(FieldValue::Text(text)) => Ok(Some(text.clone())),
            Some(other) => Err(CoreError::field_type(name, "text", other.type_name())),
        }
    }

    #[track_caller]
    pub fn bool(&self, name: &str) -> CoreErrorResult<bool> {
        match self.required(name)? {
            FieldValue::Bool(flag) => Ok(*flag),
            other => Err(CoreError::field_type(name, "bool", other.type_name())),
        }
    }

    /// Reads a boolean, falling back to `default` when absent or NULL.
    #[track_caller]
    pub fn bool_or(&self, name: &str, default: bool) -> CoreErrorResult<bool> {
        match self.0.get(name) {
            None | Some(FieldValue::Null) => Ok(default),
            Some(_) => self.bool(name),
        }
    }

    #[track_caller]
    pub fn optional_i64(&self, name: &str) -> CoreErrorResult<Option<i64>> {
        match self.0.get(name) {
            None | Some(FieldValue::Null) => Ok(None),
            Some(FieldValue::Integer(value)) => Ok(Some(*value)),
            Some(other) => Err(CoreError::field_type(name, "integer", other.type_name())),
        }
    }
}

impl IntoIterator for Fields {
    type Item = (String, FieldValue);
    type IntoIter = btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = (&'a String, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}
