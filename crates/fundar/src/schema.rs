use crate::error::SchemaError;
use serde::Serialize;
use std::collections::HashSet;

///
/// Schema
///
/// Ordered field list owned by one record type.
/// Declaration order drives positional construction, iteration order and
/// rendering. Built once (usually by `#[derive(Record)]`) and never mutated.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Schema {
    name: &'static str,
    fields: &'static [Field],
}

impl Schema {
    #[must_use]
    pub const fn new(name: &'static str, fields: &'static [Field]) -> Self {
        Self { name, fields }
    }

    /// Record type name used for rendering and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn fields(&self) -> &'static [Field] {
        self.fields
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + use<> {
        let fields = self.fields;
        fields.iter().map(|field| field.name)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static Field> {
        self.fields.iter().find(|field| field.name == name)
    }

    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Reject empty and duplicate field names.
    ///
    /// Derived schemas are checked at compile time; this covers schemas
    /// assembled by hand.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = HashSet::with_capacity(self.fields.len());

        for (index, field) in self.fields.iter().enumerate() {
            if field.name.is_empty() {
                return Err(SchemaError::EmptyFieldName {
                    record: self.name,
                    index,
                });
            }

            if !seen.insert(field.name) {
                return Err(SchemaError::DuplicateField {
                    record: self.name,
                    field: field.name,
                });
            }
        }

        Ok(())
    }
}

///
/// Field
///
/// Field name plus its declared type label (`i64`, `Vec<String>`, ...).
/// The label is descriptive only; conversions go through `FieldValue`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Field {
    pub name: &'static str,
    pub ty: &'static str,
}

impl Field {
    #[must_use]
    pub const fn new(name: &'static str, ty: &'static str) -> Self {
        Self { name, ty }
    }
}
