//! MySQL statement grammar.
//!
//! Pure text compilation: each function maps its inputs to SQL text and
//! nothing else. Bindings are taken from the same [`FieldMap`] iteration
//! order the text is built from, so the two always line up.
//!
//! Identifiers are inserted verbatim; only values are parameterized.

use crate::fields::FieldMap;

/// Positional parameter marker.
pub const PLACEHOLDER: &str = "?";

/// Optional trailing clauses for a SELECT, always appended in the order
/// GROUP BY, ORDER BY, LIMIT.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectOptions {
    group_by: Option<String>,
    order_by: Option<String>,
    limit: Option<u64>,
}

impl SelectOptions {
    /// No trailing clauses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the GROUP BY expression.
    #[must_use]
    pub fn group_by(mut self, expr: impl Into<String>) -> Self {
        self.group_by = Some(expr.into());
        self
    }

    /// Sets the ORDER BY expression.
    #[must_use]
    pub fn order_by(mut self, expr: impl Into<String>) -> Self {
        self.order_by = Some(expr.into());
        self
    }

    /// Sets the row limit. A limit of 0 means no limit.
    #[must_use]
    pub const fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// The MySQL grammar. Stateless, so one value can be shared freely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MySqlGrammar;

impl MySqlGrammar {
    /// Creates the grammar.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// `INSERT INTO t (a, b) VALUES (?, ?)`
    #[must_use]
    pub fn compile_insert(&self, table: &str, fields: &FieldMap) -> String {
        let columns: Vec<&str> = fields.columns().collect();
        let placeholders = vec![PLACEHOLDER; columns.len()];
        format!(
            "INSERT INTO {table} ({}) VALUES ({})",
            columns.join(", "),
            placeholders.join(", ")
        )
    }

    /// `SELECT * FROM t WHERE <condition>`
    #[must_use]
    pub fn compile_select(&self, table: &str, condition: &str) -> String {
        format!("SELECT * FROM {table} WHERE {condition}")
    }

    /// [`compile_select`](Self::compile_select) plus GROUP BY, ORDER BY and
    /// LIMIT, each only when requested.
    #[must_use]
    pub fn compile_select_with(
        &self,
        table: &str,
        condition: &str,
        options: &SelectOptions,
    ) -> String {
        let mut sql = self.compile_select(table, condition);

        if let Some(group_by) = non_blank(options.group_by.as_deref()) {
            sql.push_str(" GROUP BY ");
            sql.push_str(group_by);
        }

        if let Some(order_by) = non_blank(options.order_by.as_deref()) {
            sql.push_str(" ORDER BY ");
            sql.push_str(order_by);
        }

        if let Some(limit) = options.limit.filter(|n| *n > 0) {
            sql.push_str(&format!(" LIMIT {limit}"));
        }

        sql
    }

    /// `SELECT <fields> FROM t [WHERE <condition>]`
    #[must_use]
    pub fn compile_select_fields(
        &self,
        table: &str,
        fields: &str,
        condition: Option<&str>,
    ) -> String {
        match non_blank(condition) {
            Some(condition) => format!("SELECT {fields} FROM {table} WHERE {condition}"),
            None => format!("SELECT {fields} FROM {table}"),
        }
    }

    /// `UPDATE t SET a = ?, b = ? WHERE <condition>`
    #[must_use]
    pub fn compile_update(&self, table: &str, fields: &FieldMap, condition: &str) -> String {
        let set_parts: Vec<String> = fields
            .columns()
            .map(|c| format!("{c} = {PLACEHOLDER}"))
            .collect();
        format!(
            "UPDATE {table} SET {} WHERE {condition}",
            set_parts.join(", ")
        )
    }

    /// `DELETE FROM t WHERE <condition>`
    #[must_use]
    pub fn compile_delete(&self, table: &str, condition: &str) -> String {
        format!("DELETE FROM {table} WHERE {condition}")
    }

    /// `TRUNCATE TABLE t`
    #[must_use]
    pub fn compile_truncate(&self, table: &str) -> String {
        format!("TRUNCATE TABLE {table}")
    }

    /// `SELECT EXISTS (SELECT 1 FROM t WHERE <condition>)`
    #[must_use]
    pub fn compile_exists(&self, table: &str, condition: &str) -> String {
        format!("SELECT EXISTS (SELECT 1 FROM {table} WHERE {condition})")
    }

    /// `SELECT COUNT(*) FROM t [WHERE <condition>]`
    #[must_use]
    pub fn compile_count(&self, table: &str, condition: Option<&str>) -> String {
        match non_blank(condition) {
            Some(condition) => format!("SELECT COUNT(*) FROM {table} WHERE {condition}"),
            None => format!("SELECT COUNT(*) FROM {table}"),
        }
    }

    /// Caller-written SQL, passed through.
    #[must_use]
    pub fn compile_raw(&self, sql: &str) -> String {
        sql.to_string()
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const G: MySqlGrammar = MySqlGrammar::new();

    #[test]
    fn test_insert() {
        let fields = FieldMap::new().set("name", "Alice").set("email", "a@x.com");
        assert_eq!(
            G.compile_insert("users", &fields),
            "INSERT INTO users (name, email) VALUES (?, ?)"
        );
    }

    #[test]
    fn test_select() {
        assert_eq!(
            G.compile_select("contas", "1"),
            "SELECT * FROM contas WHERE 1"
        );
    }

    #[test]
    fn test_select_with_no_options_is_plain_select() {
        assert_eq!(
            G.compile_select_with("contas", "1", &SelectOptions::new()),
            "SELECT * FROM contas WHERE 1"
        );
    }

    #[test]
    fn test_select_with_all_options_in_fixed_order() {
        // Setter order must not affect clause order.
        let options = SelectOptions::new()
            .limit(10)
            .order_by("created_at DESC")
            .group_by("status");
        assert_eq!(
            G.compile_select_with("contas", "1", &options),
            "SELECT * FROM contas WHERE 1 GROUP BY status ORDER BY created_at DESC LIMIT 10"
        );
    }

    #[test]
    fn test_select_zero_limit_is_omitted() {
        let options = SelectOptions::new().limit(0);
        assert_eq!(
            G.compile_select_with("t", "1", &options),
            "SELECT * FROM t WHERE 1"
        );
    }

    #[test]
    fn test_select_fields() {
        assert_eq!(
            G.compile_select_fields("users", "id, name", Some("active = ?")),
            "SELECT id, name FROM users WHERE active = ?"
        );
        assert_eq!(
            G.compile_select_fields("users", "*", None),
            "SELECT * FROM users"
        );
        assert_eq!(
            G.compile_select_fields("users", "*", Some("")),
            "SELECT * FROM users"
        );
    }

    #[test]
    fn test_update() {
        let fields = FieldMap::new().set("name", "Bob").set("age", 3_i32);
        assert_eq!(
            G.compile_update("users", &fields, "id = ?"),
            "UPDATE users SET name = ?, age = ? WHERE id = ?"
        );
    }

    #[test]
    fn test_delete_truncate_exists() {
        assert_eq!(
            G.compile_delete("users", "id = ?"),
            "DELETE FROM users WHERE id = ?"
        );
        assert_eq!(G.compile_truncate("users"), "TRUNCATE TABLE users");
        assert_eq!(
            G.compile_exists("users", "email = ?"),
            "SELECT EXISTS (SELECT 1 FROM users WHERE email = ?)"
        );
    }

    #[test]
    fn test_count() {
        assert_eq!(
            G.compile_count("users", None),
            "SELECT COUNT(*) FROM users"
        );
        assert_eq!(
            G.compile_count("users", Some("active = 1")),
            "SELECT COUNT(*) FROM users WHERE active = 1"
        );
    }

    #[test]
    fn test_raw() {
        assert_eq!(G.compile_raw("SELECT 1"), "SELECT 1");
    }
}
