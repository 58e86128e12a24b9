//! Error types for statement compilation and schema building.

use thiserror::Error;

/// Errors raised before any SQL leaves this crate.
///
/// Every variant describes a malformed call site. They are returned before
/// compilation, so a failed check never yields partial SQL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayerError {
    /// An operation was invoked before a table identifier was bound.
    #[error("table not specified")]
    TableNotSet,

    /// A field name in an insert/update map, or a field list, is empty.
    #[error("field name cannot be empty")]
    InvalidField,

    /// A null value was supplied to an insert field.
    #[error("field '{0}' cannot be null")]
    NullValue(String),

    /// A condition was required but blank.
    #[error("condition cannot be empty")]
    EmptyCondition,

    /// An insert or update was given no fields at all.
    #[error("no fields given for {0}")]
    EmptyFields(&'static str),

    /// A CREATE blueprint declared no columns, or an ALTER blueprint
    /// declared no changes.
    #[error("blueprint for table '{0}' is empty")]
    EmptyBlueprint(String),

    /// The inflector has no rule table for this language tag.
    #[error("unknown inflector language: {0}")]
    UnknownLanguage(String),
}

/// Result type alias for compilation.
pub type Result<T> = std::result::Result<T, LayerError>;
