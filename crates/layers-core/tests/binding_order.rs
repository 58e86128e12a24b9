//! Placeholder counts and binding order for every DML statement.

mod common;
use common::*;

use layers_core::{Condition, FieldMap, Layer, SelectOptions, SqlValue, StatementKind};

#[test]
fn insert_placeholders_match_field_count() {
    for n in 1..=6 {
        let fields = text_fields(n);
        let expected = fields.bindings();
        let statement = Layer::table("t").insert(fields).unwrap();

        assert_eq!(placeholders(statement.sql()), n);
        assert_eq!(statement.bindings(), expected.as_slice());
    }
}

#[test]
fn insert_columns_follow_map_order() {
    let statement = Layer::table("users")
        .insert(FieldMap::new().set("zeta", 1_i32).set("alpha", 2_i32))
        .unwrap();

    assert_eq!(
        statement.sql(),
        "INSERT INTO users (zeta, alpha) VALUES (?, ?)"
    );
    assert_eq!(statement.bindings(), &[SqlValue::Int(1), SqlValue::Int(2)]);
    assert_eq!(statement.kind(), StatementKind::Insert);
}

#[test]
fn update_binds_fields_then_condition() {
    let fields = FieldMap::new()
        .set("name", "Bob")
        .set("nickname", None::<String>)
        .set("age", 31_i32);
    let condition = Condition::new("id = ? AND tenant = ?").bind(7_i64).bind("acme");

    let statement = Layer::table("users").update(fields, condition).unwrap();

    assert_eq!(
        statement.sql(),
        "UPDATE users SET name = ?, nickname = ?, age = ? WHERE id = ? AND tenant = ?"
    );
    assert_eq!(placeholders(statement.sql()), 5);
    assert_eq!(
        statement.bindings(),
        &[
            text("Bob"),
            SqlValue::Null,
            SqlValue::Int(31),
            SqlValue::Int(7),
            text("acme"),
        ]
    );
}

#[test]
fn select_passes_condition_bindings_unchanged() {
    let statement = Layer::table("contas")
        .select(Condition::new("status = ? AND saldo > ?").bind("ativa").bind(100.5_f64))
        .unwrap();

    assert_eq!(
        statement.sql(),
        "SELECT * FROM contas WHERE status = ? AND saldo > ?"
    );
    assert_eq!(
        statement.bindings(),
        &[text("ativa"), SqlValue::Float(100.5)]
    );
}

#[test]
fn select_everything() {
    let statement = Layer::table("contas").select("1").unwrap();
    assert_eq!(statement.sql(), "SELECT * FROM contas WHERE 1");
    assert!(statement.bindings().is_empty());
}

#[test]
fn select_trailing_clauses() {
    let layer = Layer::table("contas");

    let only_order = layer
        .select_with("1", &SelectOptions::new().order_by("id DESC"))
        .unwrap();
    assert_eq!(only_order.sql(), "SELECT * FROM contas WHERE 1 ORDER BY id DESC");

    let all = layer
        .select_with(
            Condition::new("saldo > ?").bind(0_i32),
            &SelectOptions::new()
                .group_by("provincia")
                .order_by("provincia")
                .limit(5),
        )
        .unwrap();
    assert_eq!(
        all.sql(),
        "SELECT * FROM contas WHERE saldo > ? GROUP BY provincia ORDER BY provincia LIMIT 5"
    );
    assert_eq!(all.bindings(), &[SqlValue::Int(0)]);
}

#[test]
fn select_fields_with_and_without_condition() {
    let layer = Layer::table("users");

    let filtered = layer
        .select_fields("id, name", Some(Condition::new("active = ?").bind(true)))
        .unwrap();
    assert_eq!(filtered.sql(), "SELECT id, name FROM users WHERE active = ?");
    assert_eq!(filtered.bindings(), &[SqlValue::Bool(true)]);

    let all = layer.select_fields("*", None).unwrap();
    assert_eq!(all.sql(), "SELECT * FROM users");
    assert!(all.bindings().is_empty());
}

#[test]
fn delete_count_exists_truncate() {
    let layer = Layer::table("sessions");

    let delete = layer
        .delete(Condition::new("expires_at < ?").bind("2024-01-01"))
        .unwrap();
    assert_eq!(delete.sql(), "DELETE FROM sessions WHERE expires_at < ?");
    assert_eq!(delete.bindings(), &[text("2024-01-01")]);

    let count_all = layer.count(None).unwrap();
    assert_eq!(count_all.sql(), "SELECT COUNT(*) FROM sessions");
    assert_eq!(count_all.kind(), StatementKind::Count);

    let count_some = layer
        .count(Some(Condition::new("user_id = ?").bind(3_i32)))
        .unwrap();
    assert_eq!(
        count_some.sql(),
        "SELECT COUNT(*) FROM sessions WHERE user_id = ?"
    );
    assert_eq!(count_some.bindings(), &[SqlValue::Int(3)]);

    let exists = layer
        .exists(Condition::new("token = ?").bind("abc"))
        .unwrap();
    assert_eq!(
        exists.sql(),
        "SELECT EXISTS (SELECT 1 FROM sessions WHERE token = ?)"
    );
    assert_eq!(exists.kind(), StatementKind::Exists);

    let truncate = layer.truncate().unwrap();
    assert_eq!(truncate.sql(), "TRUNCATE TABLE sessions");
    assert!(truncate.bindings().is_empty());
}

#[test]
fn values_never_reach_the_sql_text() {
    let malicious = "'; DROP TABLE users; --";
    let statement = Layer::table("users")
        .insert(FieldMap::new().set("name", malicious))
        .unwrap();

    assert_eq!(statement.sql(), "INSERT INTO users (name) VALUES (?)");
    assert!(matches!(&statement.bindings()[0], SqlValue::Text(s) if s == malicious));
}

#[test]
fn layers_do_not_share_tables() {
    let users = Layer::table("users");
    let posts = Layer::table("posts");

    assert_eq!(users.truncate().unwrap().sql(), "TRUNCATE TABLE users");
    assert_eq!(posts.truncate().unwrap().sql(), "TRUNCATE TABLE posts");
    assert_eq!(users.count(None).unwrap().sql(), "SELECT COUNT(*) FROM users");
}
