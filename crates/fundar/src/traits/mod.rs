mod field_value;

pub use field_value::*;

use crate::{
    error::RecordError,
    record,
    schema::Schema,
    value::{Value, ValueMap},
};
use std::any::Any;

///
/// Record
///
/// A struct whose declared fields form an ordered `Schema`.
///
/// `#[derive(Record)]` implements the required methods; the provided ones
/// (dict conversion, diff, merge, copy-with-changes) are generic over the
/// schema and must not be overridden.
///

pub trait Record: Any + Sized {
    const SCHEMA: &'static Schema;

    ///
    /// GENERATED
    ///

    /// Positional construction in schema order; runs both constructor phases.
    fn construct(values: Vec<Value>) -> Result<Self, RecordError>;

    /// Current value of a schema field, `None` for unknown names.
    fn get_value(&self, field: &str) -> Option<Value>;

    /// Assign one schema field from a generic value.
    fn set_value(&mut self, field: &str, value: Value) -> Result<(), RecordError>;

    /// Check that `value` converts into `field` without assigning it.
    fn check_value(field: &str, value: &Value) -> Result<(), RecordError>;

    /// Whether a schema field currently holds null, `None` for unknown names.
    fn is_null(&self, field: &str) -> Option<bool>;

    /// Schema fields whose values differ under the field type's `PartialEq`.
    fn diff_fields(&self, other: &Self) -> Vec<&'static str>;

    ///
    /// INTROSPECTION
    ///

    /// Field names in schema order.
    #[must_use]
    fn fields() -> Vec<&'static str> {
        Self::SCHEMA.field_names().collect()
    }

    /// Fields whose current value is not null, in schema order.
    #[must_use]
    fn not_null_fields(&self) -> Vec<&'static str> {
        Self::SCHEMA
            .field_names()
            .filter(|name| self.is_null(name) == Some(false))
            .collect()
    }

    ///
    /// SERIALIZATION
    ///

    /// Field name → current value, schema order.
    #[must_use]
    fn to_dict(&self) -> ValueMap {
        record::to_dict(self)
    }

    /// Build from a mapping; missing keys read as null, unknown keys are
    /// ignored.
    fn from_dict(map: &ValueMap) -> Result<Self, RecordError> {
        record::from_dict(map)
    }

    ///
    /// COMPARISON
    ///

    /// Differing field names, or every field when `other` is another type.
    ///
    /// The match is on the exact concrete type: a `&Box<Self>` or
    /// `&Rc<Self>` is another type and reports every field. Deref first, or
    /// use `equals_record`.
    #[must_use]
    fn diff(&self, other: &dyn Any) -> Vec<&'static str> {
        record::diff(self, other)
    }

    /// `diff(other)` is empty. Same exact-type rule as `diff`.
    #[must_use]
    fn equals(&self, other: &dyn Any) -> bool {
        self.diff(other).is_empty()
    }

    /// Field-wise equality against a value already known to be `Self`.
    #[must_use]
    fn equals_record(&self, other: &Self) -> bool {
        self.diff_fields(other).is_empty()
    }

    ///
    /// MUTATION
    ///

    /// Merge `source` into `self` in place.
    ///
    /// `source` must carry exactly the schema's keys; null entries are
    /// skipped and `overrides` win over `source`.
    fn update(&mut self, source: &ValueMap, overrides: ValueMap) -> Result<&mut Self, RecordError> {
        record::update(self, source, overrides)?;

        Ok(self)
    }

    /// Merge another record's dict form into `self`.
    fn update_from<R: Record>(
        &mut self,
        source: &R,
        overrides: ValueMap,
    ) -> Result<&mut Self, RecordError> {
        self.update(&source.to_dict(), overrides)
    }

    /// New record from `source`'s dict form with `overrides` applied;
    /// `source` is left untouched.
    fn from_other<R: Record>(source: &R, overrides: ValueMap) -> Result<Self, RecordError> {
        record::from_other(source, overrides)
    }
}
