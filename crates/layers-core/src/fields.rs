//! Ordered column-to-value maps.

use indexmap::IndexMap;

use crate::value::{SqlValue, ToSqlValue};

/// Ordered mapping from column name to bound value.
///
/// Insertion order is the binding order: the columns of an INSERT or the SET
/// assignments of an UPDATE are rendered in this order and the values are
/// bound in the same order. Setting a column that is already present replaces
/// its value without moving it, so a map never holds duplicate columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    fields: IndexMap<String, SqlValue>,
}

impl FieldMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Sets a column value, builder style.
    #[must_use]
    pub fn set<T: ToSqlValue>(mut self, column: impl Into<String>, value: T) -> Self {
        self.insert(column, value);
        self
    }

    /// Sets a column value, returning the previous value for that column.
    pub fn insert<T: ToSqlValue>(
        &mut self,
        column: impl Into<String>,
        value: T,
    ) -> Option<SqlValue> {
        self.fields.insert(column.into(), value.to_sql_value())
    }

    /// Removes a column, keeping the order of the remaining ones.
    pub fn remove(&mut self, column: &str) -> Option<SqlValue> {
        self.fields.shift_remove(column)
    }

    /// Returns the value bound to a column.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&SqlValue> {
        self.fields.get(column)
    }

    /// Returns whether the column is present.
    #[must_use]
    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the map has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Column names in binding order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// `(column, value)` pairs in binding order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SqlValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// The values in binding order.
    #[must_use]
    pub fn bindings(&self) -> Vec<SqlValue> {
        self.fields.values().cloned().collect()
    }

    /// Keeps only the listed columns, in their current order.
    pub fn retain_columns(&mut self, allowed: &[&str]) {
        self.fields.retain(|column, _| allowed.contains(&column.as_str()));
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<String>,
    V: ToSqlValue,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (column, value) in iter {
            map.insert(column, value);
        }
        map
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, SqlValue);
    type IntoIter = indexmap::map::IntoIter<String, SqlValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_binding_order() {
        let fields = FieldMap::new()
            .set("name", "Alice")
            .set("age", 30_i32)
            .set("email", "alice@example.com");

        assert_eq!(
            fields.columns().collect::<Vec<_>>(),
            vec!["name", "age", "email"]
        );
        assert_eq!(
            fields.bindings(),
            vec![
                SqlValue::Text("Alice".into()),
                SqlValue::Int(30),
                SqlValue::Text("alice@example.com".into()),
            ]
        );
    }

    #[test]
    fn test_duplicate_column_replaces_in_place() {
        let mut fields = FieldMap::new().set("a", 1_i32).set("b", 2_i32);
        let previous = fields.insert("a", 10_i32);

        assert_eq!(previous, Some(SqlValue::Int(1)));
        assert_eq!(fields.len(), 2);
        assert_eq!(fields.columns().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(fields.get("a"), Some(&SqlValue::Int(10)));
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut fields = FieldMap::new()
            .set("a", 1_i32)
            .set("b", 2_i32)
            .set("c", 3_i32);
        fields.remove("b");
        assert_eq!(fields.columns().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_retain_columns() {
        let mut fields = FieldMap::new()
            .set("name", "x")
            .set("is_admin", true)
            .set("email", "y");
        fields.retain_columns(&["email", "name"]);
        assert_eq!(fields.columns().collect::<Vec<_>>(), vec!["name", "email"]);
    }

    #[test]
    fn test_from_iterator() {
        let fields: FieldMap = vec![("x", 1_i64), ("y", 2_i64)].into_iter().collect();
        assert_eq!(fields.len(), 2);
        assert!(fields.contains("y"));
    }
}
