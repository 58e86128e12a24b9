//! Pre-compile checks.
//!
//! These run before the grammar sees its input. A failed check aborts the
//! operation; nothing is compiled or dispatched after it.

use crate::error::{LayerError, Result};
use crate::fields::FieldMap;

/// Checks an INSERT field map: non-empty, no empty column names, no nulls.
pub fn validate_insert_fields(fields: &FieldMap) -> Result<()> {
    if fields.is_empty() {
        return Err(LayerError::EmptyFields("insert"));
    }
    for (column, value) in fields.iter() {
        if column.trim().is_empty() {
            return Err(LayerError::InvalidField);
        }
        if value.is_null() {
            return Err(LayerError::NullValue(column.to_string()));
        }
    }
    Ok(())
}

/// Checks an UPDATE field map: non-empty, no empty column names.
///
/// Null values are allowed so a column can be set to NULL.
pub fn validate_update_fields(fields: &FieldMap) -> Result<()> {
    if fields.is_empty() {
        return Err(LayerError::EmptyFields("update"));
    }
    if fields.columns().any(|c| c.trim().is_empty()) {
        return Err(LayerError::InvalidField);
    }
    Ok(())
}

/// Checks that a required condition is not blank.
pub fn validate_condition(condition: &str) -> Result<()> {
    if condition.trim().is_empty() {
        return Err(LayerError::EmptyCondition);
    }
    Ok(())
}

/// Checks that a table identifier is bound, returning it.
pub fn validate_table(table: Option<&str>) -> Result<&str> {
    match table {
        Some(name) if !name.trim().is_empty() => Ok(name),
        _ => Err(LayerError::TableNotSet),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::SqlValue;

    #[test]
    fn test_insert_rejects_empty_column() {
        let fields = FieldMap::new().set("", "x");
        assert_eq!(
            validate_insert_fields(&fields),
            Err(LayerError::InvalidField)
        );
    }

    #[test]
    fn test_insert_rejects_null() {
        let fields = FieldMap::new().set("name", "x").set("a", SqlValue::Null);
        assert_eq!(
            validate_insert_fields(&fields),
            Err(LayerError::NullValue("a".into()))
        );
    }

    #[test]
    fn test_insert_rejects_empty_map() {
        assert_eq!(
            validate_insert_fields(&FieldMap::new()),
            Err(LayerError::EmptyFields("insert"))
        );
    }

    #[test]
    fn test_insert_accepts_values() {
        let fields = FieldMap::new().set("name", "x").set("age", 3_i32);
        assert!(validate_insert_fields(&fields).is_ok());
    }

    #[test]
    fn test_update_allows_null() {
        let fields = FieldMap::new().set("a", None::<i32>);
        assert!(validate_update_fields(&fields).is_ok());
    }

    #[test]
    fn test_update_rejects_empty_column() {
        let fields = FieldMap::new().set("", 1_i32);
        assert_eq!(
            validate_update_fields(&fields),
            Err(LayerError::InvalidField)
        );
    }

    #[test]
    fn test_update_rejects_empty_map() {
        assert_eq!(
            validate_update_fields(&FieldMap::new()),
            Err(LayerError::EmptyFields("update"))
        );
    }

    #[test]
    fn test_condition() {
        assert_eq!(validate_condition(""), Err(LayerError::EmptyCondition));
        assert_eq!(validate_condition("  "), Err(LayerError::EmptyCondition));
        assert!(validate_condition("id = ?").is_ok());
    }

    #[test]
    fn test_table() {
        assert_eq!(validate_table(None), Err(LayerError::TableNotSet));
        assert_eq!(validate_table(Some("")), Err(LayerError::TableNotSet));
        assert_eq!(validate_table(Some("users")), Ok("users"));
    }
}
