//! Declarative record types.
//!
//! `#[derive(Record)]` turns a struct of `Option<T>` fields into a record
//! type with an ordered schema, a positional constructor, dict conversion,
//! structural diff, in-place merge, copy-with-changes and a
//! `Name(field=value, ...)` representation.

extern crate self as fundar;

// public exports are one module level down
pub mod error;
#[cfg(feature = "json")]
pub mod json;
pub mod record;
pub mod scale;
pub mod schema;
pub mod traits;
pub mod value;

pub use error::{RecordError, SchemaError};
pub use fundar_derive::Record;
pub use schema::Schema;
pub use traits::Record;
pub use value::{Value, ValueMap};

///
/// Prelude
///
/// Domain vocabulary only: the derive, the trait and the value types.
///

pub mod prelude {
    pub use crate::{
        Record,
        error::RecordError,
        traits::FieldValue,
        value::{Value, ValueMap},
        value_map,
    };
}
