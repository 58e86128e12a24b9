//! Complete DDL statements built through `Schema`.

use layers_core::schema::{ForeignKeyAction, Schema};
use layers_core::{Inflector, Language, LayerError};

#[test]
fn users_table() {
    let sql = Schema::create("users", |t| {
        t.increments("id");
        t.string("name", 100).nullable().unique();
    })
    .unwrap();

    assert_eq!(
        sql,
        "CREATE TABLE users (id INT AUTO_INCREMENT PRIMARY KEY, name VARCHAR(100) NULL, UNIQUE (name))"
    );
}

#[test]
fn full_table_definition() {
    let sql = Schema::create("pedidos", |t| {
        t.increments("pedido_id");
        t.integer("conta_id").unsigned().not_nullable().index();
        t.decimal("total", 10, 2).default(0).comment("valor total");
        t.enumeration("estado", ["aberto", "pago"]).default("aberto");
        t.foreign(
            "conta_id",
            "contas",
            &Inflector::id_column("contas", Language::Pt),
        )
        .on_delete(ForeignKeyAction::Restrict);
        t.check("total >= 0");
        t.timestamps();
    })
    .unwrap();

    assert_eq!(
        sql,
        "CREATE TABLE pedidos (\
         pedido_id INT AUTO_INCREMENT PRIMARY KEY, \
         conta_id INT UNSIGNED NOT NULL, \
         total DECIMAL(10, 2) DEFAULT 0 COMMENT 'valor total', \
         estado ENUM('aberto', 'pago') DEFAULT 'aberto', \
         created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP, \
         updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP, \
         INDEX (conta_id), \
         FOREIGN KEY (conta_id) REFERENCES contas(conta_id) ON DELETE RESTRICT ON UPDATE CASCADE, \
         CHECK (total >= 0))"
    );
}

#[test]
fn constraints_bind_to_the_declared_column() {
    // Declaring more columns after `unique()` must not move the constraint.
    let sql = Schema::create("t", |t| {
        let email = t.string("email", 255).unique();
        assert_eq!(email.name(), "email");
        t.string("phone", 20);
        t.index("phone");
    })
    .unwrap();

    assert_eq!(
        sql,
        "CREATE TABLE t (email VARCHAR(255), phone VARCHAR(20), UNIQUE (email), INDEX (phone))"
    );
}

#[test]
fn alter_and_drop() {
    let alter = Schema::table("users", |t| {
        t.string("phone", 20).nullable();
        t.change_column("name", |c| {
            c.string("name", 200).not_nullable();
        });
        t.drop_column("fax");
    })
    .unwrap();
    assert_eq!(
        alter,
        "ALTER TABLE users ADD COLUMN phone VARCHAR(20) NULL, \
         MODIFY COLUMN name VARCHAR(200) NOT NULL, DROP COLUMN fax"
    );

    assert_eq!(
        Schema::drop_if_exists("users").unwrap(),
        "DROP TABLE IF EXISTS users"
    );
}

#[test]
fn empty_blueprint_is_rejected() {
    assert_eq!(
        Schema::create("users", |t| {
            t.check("1 = 1");
        }),
        Err(LayerError::EmptyBlueprint("users".into()))
    );
}

#[test]
fn alter_without_changes_is_rejected() {
    assert_eq!(
        Schema::table("users", |_| {}),
        Err(LayerError::EmptyBlueprint("users".into()))
    );
}

#[test]
fn change_column_constraints_reach_the_alter() {
    let sql = Schema::table("users", |t| {
        t.change_column("email", |c| {
            c.string("email", 255).not_nullable().unique();
        });
    })
    .unwrap();

    assert_eq!(
        sql,
        "ALTER TABLE users MODIFY COLUMN email VARCHAR(255) NOT NULL, ADD UNIQUE (email)"
    );
}
