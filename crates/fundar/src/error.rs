use crate::{schema::Schema, value::Value};
use thiserror::Error as ThisError;

///
/// RecordError
///
/// Failures raised by generated record operations.
/// Comparing against an incompatible type is not an error; `diff` reports
/// every field instead.
///

#[remain::sorted]
#[derive(Clone, Debug, PartialEq, ThisError)]
pub enum RecordError {
    #[error("{record} takes {expected} positional values, {found} given")]
    Arity {
        record: &'static str,
        expected: usize,
        found: usize,
    },

    #[error(
        "{record} update source must provide exactly the schema fields (missing: {missing:?}, unexpected: {unexpected:?})"
    )]
    Configuration {
        record: &'static str,
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("{record}.{field} expects {expected}, found {kind} {found}", kind = .found.kind())]
    InvalidValue {
        record: &'static str,
        field: &'static str,
        expected: &'static str,
        found: Value,
    },

    #[error("{record} has no field '{field}'")]
    UnknownField { record: &'static str, field: String },
}

impl RecordError {
    /// Wrong number of positional values for `schema`.
    #[must_use]
    pub const fn arity(schema: &Schema, found: usize) -> Self {
        Self::Arity {
            record: schema.name(),
            expected: schema.len(),
            found,
        }
    }

    /// Field name not declared by `schema`.
    #[must_use]
    pub fn unknown_field(schema: &Schema, field: impl Into<String>) -> Self {
        Self::UnknownField {
            record: schema.name(),
            field: field.into(),
        }
    }

    /// Field names this error refers to, if any.
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        match self {
            Self::Configuration {
                missing,
                unexpected,
                ..
            } => missing
                .iter()
                .chain(unexpected)
                .map(String::as_str)
                .collect(),
            Self::InvalidValue { field, .. } => vec![*field],
            Self::UnknownField { field, .. } => vec![field.as_str()],
            Self::Arity { .. } => Vec::new(),
        }
    }
}

///
/// SchemaError
///
/// Invariant violations found while validating a schema declaration.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum SchemaError {
    #[error("schema '{record}' declares field '{field}' more than once")]
    DuplicateField {
        record: &'static str,
        field: &'static str,
    },

    #[error("schema '{record}' declares an empty field name at position {index}")]
    EmptyFieldName { record: &'static str, index: usize },
}
