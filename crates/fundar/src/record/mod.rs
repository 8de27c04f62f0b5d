//! Schema-generic record operations.
//!
//! `#[derive(Record)]` only emits per-field accessors; everything that walks
//! the schema lives here and backs the provided methods of `Record`.

mod compare;
mod merge;


pub(crate) use compare::diff;
pub(crate) use merge::{from_other, update};

use crate::{
    error::RecordError,
    schema::Schema,
    traits::{FieldValue, Record},
    value::{Value, ValueMap},
};
use std::fmt;

/// Convert `value` into the type of the schema field at `index`.
///
/// Used by generated code; a shape mismatch names the field and its
/// declared type label.
#[doc(hidden)]
pub fn decode_field<T: FieldValue>(
    schema: &'static Schema,
    index: usize,
    value: &Value,
) -> Result<T, RecordError> {
    T::from_value(value).ok_or_else(|| {
        let field = &schema.fields()[index];

        RecordError::InvalidValue {
            record: schema.name(),
            field: field.name,
            expected: field.ty,
            found: value.clone(),
        }
    })
}

/// Render `Name(field=value, ...)` in schema order.
#[doc(hidden)]
pub fn fmt_record<R: Record>(record: &R, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}(", R::SCHEMA.name())?;
    for (i, name) in R::SCHEMA.field_names().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        let value = record.get_value(name).unwrap_or_default();
        write!(f, "{name}={value}")?;
    }
    f.write_str(")")
}

pub(crate) fn to_dict<R: Record>(record: &R) -> ValueMap {
    let mut map = ValueMap::with_capacity(R::SCHEMA.len());
    for name in R::SCHEMA.field_names() {
        map.insert(name, record.get_value(name).unwrap_or_default());
    }

    map
}

pub(crate) fn from_dict<R: Record>(map: &ValueMap) -> Result<R, RecordError> {
    let values = R::SCHEMA
        .field_names()
        .map(|name| {
            map.get(name).cloned().unwrap_or_else(|| {
                tracing::trace!(record = R::SCHEMA.name(), field = name, "missing key read as null");
                Value::Null
            })
        })
        .collect();

    R::construct(values)
}
