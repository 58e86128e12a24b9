//! Validation failures abort before any SQL is produced.

use layers_core::rules::{validate_condition, validate_insert_fields, validate_update_fields};
use layers_core::{Condition, FieldMap, Layer, LayerError, SqlValue};

#[test]
fn insert_field_checks() {
    assert_eq!(
        validate_insert_fields(&FieldMap::new().set("", "x")),
        Err(LayerError::InvalidField)
    );
    assert_eq!(
        validate_insert_fields(&FieldMap::new().set("a", SqlValue::Null)),
        Err(LayerError::NullValue("a".into()))
    );
    assert_eq!(
        validate_update_fields(&FieldMap::new().set("a", SqlValue::Null)),
        Ok(())
    );
}

#[test]
fn whitespace_column_names_are_invalid() {
    assert_eq!(
        validate_insert_fields(&FieldMap::new().set(" ", "x")),
        Err(LayerError::InvalidField)
    );
    assert_eq!(
        validate_update_fields(&FieldMap::new().set("name", "x").set("\t ", 1_i32)),
        Err(LayerError::InvalidField)
    );

    let layer = Layer::table("users");
    assert_eq!(
        layer.insert(FieldMap::new().set(" ", "x")),
        Err(LayerError::InvalidField)
    );
    assert_eq!(
        layer.update(FieldMap::new().set("  ", "x"), "id = 1"),
        Err(LayerError::InvalidField)
    );
}

#[test]
fn condition_checks() {
    assert_eq!(validate_condition(""), Err(LayerError::EmptyCondition));
    assert_eq!(validate_condition("id = ?"), Ok(()));
}

#[test]
fn layer_surfaces_validation_errors() {
    let layer = Layer::table("users");

    assert_eq!(
        layer.insert(FieldMap::new().set("email", None::<&str>)),
        Err(LayerError::NullValue("email".into()))
    );
    assert_eq!(
        layer.insert(FieldMap::new()),
        Err(LayerError::EmptyFields("insert"))
    );
    assert_eq!(
        layer.update(FieldMap::new(), "id = 1"),
        Err(LayerError::EmptyFields("update"))
    );
    assert_eq!(layer.select(""), Err(LayerError::EmptyCondition));
    assert_eq!(layer.delete("   "), Err(LayerError::EmptyCondition));
    assert_eq!(
        layer.exists(Condition::new("").bind(1_i32)),
        Err(LayerError::EmptyCondition)
    );
}

#[test]
fn update_may_set_null() {
    let statement = Layer::table("users")
        .update(
            FieldMap::new().set("deleted_at", SqlValue::Null),
            Condition::new("id = ?").bind(1_i32),
        )
        .unwrap();
    assert_eq!(
        statement.bindings(),
        &[SqlValue::Null, SqlValue::Int(1)]
    );
}

#[test]
fn missing_table_wins_over_other_errors() {
    let layer = Layer::new();
    assert_eq!(layer.select(""), Err(LayerError::TableNotSet));
    assert_eq!(layer.count(None), Err(LayerError::TableNotSet));
    assert_eq!(layer.exists("1"), Err(LayerError::TableNotSet));
}

#[test]
fn error_messages() {
    assert_eq!(LayerError::TableNotSet.to_string(), "table not specified");
    assert_eq!(
        LayerError::NullValue("email".into()).to_string(),
        "field 'email' cannot be null"
    );
    assert_eq!(
        LayerError::EmptyCondition.to_string(),
        "condition cannot be empty"
    );
}
