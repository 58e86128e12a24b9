#![allow(dead_code)]

use layers_core::{FieldMap, SqlValue};

/// Counts `?` placeholders outside single-quoted literals.
pub fn placeholders(sql: &str) -> usize {
    let mut in_literal = false;
    let mut count = 0;
    for ch in sql.chars() {
        match ch {
            '\'' => in_literal = !in_literal,
            '?' if !in_literal => count += 1,
            _ => {}
        }
    }
    count
}

/// A map of `n` text columns named `c0`, `c1`, ...
pub fn text_fields(n: usize) -> FieldMap {
    (0..n).map(|i| (format!("c{i}"), format!("v{i}"))).collect()
}

pub fn text(s: &str) -> SqlValue {
    SqlValue::Text(s.to_string())
}
