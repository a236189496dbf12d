//! Ordered plain-data inputs: [`Row`] and [`InGroup`].
//!
//! Both keep insertion order, which decides column order and parameter order
//! in the emitted statement. They deserialize from JSON objects (key order is
//! preserved) so request payloads can be passed straight through.

use crate::error::{SqlError, SqlResult};
use crate::value::{Literal, Value};
use indexmap::IndexMap;
use serde::Deserialize;

/// Ordered mapping from column name to [`Value`].
///
/// Used both as a record (INSERT values, UPDATE SET list) and as a condition
/// map, where it reads as a conjunction of equalities.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "IndexMap<String, serde_json::Value>")]
pub struct Row {
    entries: IndexMap<String, Value>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column (consuming form, for chaining).
    ///
    /// Re-setting an existing column replaces its value and keeps its position.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(column, value);
        self
    }

    /// Add or replace a column.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.entries.insert(column.into(), value.into());
        self
    }

    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries.get(column)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Column names in order.
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// `(column, value)` pairs in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `true` when both rows have the same column names in the same order.
    pub fn same_columns(&self, other: &Row) -> bool {
        self.len() == other.len() && self.columns().eq(other.columns())
    }
}

impl<K, V> FromIterator<(K, V)> for Row
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Row::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

impl From<IndexMap<String, serde_json::Value>> for Row {
    fn from(map: IndexMap<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for Row {
    fn from(map: serde_json::Map<String, serde_json::Value>) -> Self {
        map.into_iter().collect()
    }
}

impl TryFrom<serde_json::Value> for Row {
    type Error = SqlError;

    fn try_from(value: serde_json::Value) -> SqlResult<Self> {
        match value {
            serde_json::Value::Object(map) => Ok(map.into()),
            other => Err(SqlError::validation(format!(
                "expected a JSON object for a row, got {}",
                json_kind(&other)
            ))),
        }
    }
}

/// Ordered mapping from column name to the values of an `IN (...)` list.
///
/// Columns inside one group are ANDed; several groups are ORed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "IndexMap<String, Vec<serde_json::Value>>")]
pub struct InGroup {
    entries: IndexMap<String, Vec<Literal>>,
}

impl InGroup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column with its IN values (consuming form, for chaining).
    pub fn with<I>(mut self, column: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Literal>,
    {
        self.insert(column, values);
        self
    }

    pub fn insert<I>(&mut self, column: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<Literal>,
    {
        self.entries
            .insert(column.into(), values.into_iter().map(Into::into).collect());
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &[Literal])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl From<IndexMap<String, Vec<serde_json::Value>>> for InGroup {
    fn from(map: IndexMap<String, Vec<serde_json::Value>>) -> Self {
        let mut group = InGroup::new();
        for (column, values) in map {
            group.insert(column, values);
        }
        group
    }
}

impl TryFrom<serde_json::Value> for InGroup {
    type Error = SqlError;

    fn try_from(value: serde_json::Value) -> SqlResult<Self> {
        let serde_json::Value::Object(map) = value else {
            return Err(SqlError::validation(format!(
                "expected a JSON object for an IN group, got {}",
                json_kind(&value)
            )));
        };
        let mut group = InGroup::new();
        for (column, values) in map {
            match values {
                serde_json::Value::Array(items) => {
                    group.insert(column, items);
                }
                other => {
                    return Err(SqlError::validation(format!(
                        "IN group column '{column}' must map to an array, got {}",
                        json_kind(&other)
                    )));
                }
            }
        }
        Ok(group)
    }
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

/// Build a [`Row`] from `column => value` pairs.
///
/// ```
/// use mapsql::{raw, row};
///
/// let r = row! { "name" => "Ann", "visits" => raw("visits + 1") };
/// assert_eq!(r.columns().collect::<Vec<_>>(), ["name", "visits"]);
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::Row::new()
    };
    ($($column:expr => $value:expr),+ $(,)?) => {
        $crate::Row::new()$(.with($column, $value))+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw;
    use serde_json::json;

    #[test]
    fn row_keeps_insertion_order() {
        let r = Row::new().with("z", 1).with("a", 2).with("m", 3);
        assert_eq!(r.columns().collect::<Vec<_>>(), ["z", "a", "m"]);
    }

    #[test]
    fn reinsert_keeps_position() {
        let r = Row::new().with("a", 1).with("b", 2).with("a", 3);
        assert_eq!(r.columns().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(r.get("a"), Some(&Value::from(3)));
    }

    #[test]
    fn same_columns_is_order_sensitive() {
        let a = row! { "a" => 1, "b" => 2 };
        let b = row! { "a" => 3, "b" => 4 };
        let c = row! { "b" => 4, "a" => 3 };
        assert!(a.same_columns(&b));
        assert!(!a.same_columns(&c));
        assert!(!a.same_columns(&row! { "a" => 1 }));
    }

    #[test]
    fn row_from_json_object_preserves_key_order() {
        let r = Row::try_from(json!({ "zeta": 1, "alpha": "", "mid": null })).unwrap();
        assert_eq!(r.columns().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
        assert_eq!(r.get("alpha"), Some(&Value::from("")));
        assert_eq!(r.get("mid"), Some(&Value::Bound(Literal::Null)));
    }

    #[test]
    fn row_deserializes() {
        let r: Row = serde_json::from_str(r#"{"b": true, "a": 1.5}"#).unwrap();
        assert_eq!(r.columns().collect::<Vec<_>>(), ["b", "a"]);
        assert_eq!(r.get("a"), Some(&Value::from(1.5)));
    }

    #[test]
    fn row_from_non_object_fails() {
        assert!(Row::try_from(json!([1, 2])).is_err());
    }

    #[test]
    fn json_never_produces_raw() {
        let r = Row::try_from(json!({ "count": "count + 1" })).unwrap();
        assert!(!r.get("count").unwrap().is_raw());
    }

    #[test]
    fn macro_builds_rows() {
        assert!(row! {}.is_empty());
        let r = row! { "n" => 1, "c" => raw("c + 1"), };
        assert_eq!(r.len(), 2);
        assert!(r.get("c").unwrap().is_raw());
    }

    #[test]
    fn in_group_from_json() {
        let g = InGroup::try_from(json!({ "email": ["a@x", "b@x"], "id": [1, 2, 3] })).unwrap();
        let cols: Vec<_> = g.iter().map(|(c, v)| (c, v.len())).collect();
        assert_eq!(cols, [("email", 2), ("id", 3)]);

        let g: InGroup = serde_json::from_str(r#"{"id": []}"#).unwrap();
        assert_eq!(g.iter().next().unwrap().1.len(), 0);

        assert!(InGroup::try_from(json!({ "id": 1 })).is_err());
        assert!(InGroup::try_from(json!("id")).is_err());
    }
}
