use crate::value::{Value, ValueMap};
use std::collections::BTreeMap;

///
/// FieldValue
///
/// Conversion boundary between a record field and the generic `Value`.
/// `from_value` returns `None` when the value's shape does not fit.
///

pub trait FieldValue {
    fn to_value(&self) -> Value;

    /// Whether this value renders as `Value::Null`.
    ///
    /// `Option<Value>` and `Option<Option<T>>` can hold null inside `Some`;
    /// record null checks go through here so they agree with `to_value`.
    fn is_null_value(&self) -> bool {
        self.to_value().is_null()
    }

    #[must_use]
    fn from_value(value: &Value) -> Option<Self>
    where
        Self: Sized;
}

impl FieldValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn is_null_value(&self) -> bool {
        self.is_null()
    }

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FieldValue for ValueMap {
    fn to_value(&self) -> Value {
        Value::Map(self.clone())
    }

    fn is_null_value(&self) -> bool {
        false
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_map().cloned()
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }

    fn is_null_value(&self) -> bool {
        false
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_text().map(str::to_string)
    }
}

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_bool()
    }
}

impl FieldValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64()
    }
}

impl FieldValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }

    #[expect(clippy::cast_possible_truncation)]
    fn from_value(value: &Value) -> Option<Self> {
        value.as_f64().map(|f| f as Self)
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    fn is_null_value(&self) -> bool {
        self.as_ref().is_none_or(FieldValue::is_null_value)
    }

    fn from_value(value: &Value) -> Option<Self> {
        if value.is_null() {
            return Some(None);
        }

        T::from_value(value).map(Some)
    }
}

impl<T: FieldValue> FieldValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn is_null_value(&self) -> bool {
        (**self).is_null_value()
    }

    fn from_value(value: &Value) -> Option<Self> {
        T::from_value(value).map(Self::new)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn is_null_value(&self) -> bool {
        false
    }

    fn from_value(value: &Value) -> Option<Self> {
        value.as_list()?.iter().map(T::from_value).collect()
    }
}

impl<T: FieldValue> FieldValue for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }

    fn is_null_value(&self) -> bool {
        false
    }

    fn from_value(value: &Value) -> Option<Self> {
        value
            .as_map()?
            .iter()
            .map(|(k, v)| T::from_value(v).map(|v| (k.clone(), v)))
            .collect()
    }
}

// impl_field_value
// Integers accept either signedness as long as the value fits.
macro_rules! impl_field_value {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl FieldValue for $type {
                fn to_value(&self) -> Value {
                    Value::$variant((*self).into())
                }

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Int(v) => (*v).try_into().ok(),
                        Value::Uint(v) => (*v).try_into().ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_field_value!(
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
);
