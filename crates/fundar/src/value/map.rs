use crate::value::Value;
use derive_more::{Deref, IntoIterator};
use std::fmt;

///
/// ValueMap
///
/// Ordered string-keyed mapping of values, the generic dict form of a record.
///
/// - insertion order is preserved; `to_dict` output follows schema order
/// - keys are unique; inserting an existing key replaces its value in place
///

#[derive(Clone, Debug, Default, Deref, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct ValueMap(Vec<(String, Value)>);

impl ValueMap {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Insert or replace; returns the previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();

        if let Some((_, slot)) = self.0.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(slot, value));
        }
        self.0.push((key, value));

        None
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self.0.iter().position(|(k, _)| k == key)?;

        Some(self.0.remove(index).1)
    }

    /// Overlay every entry of `other`; later entries win.
    pub fn extend_from(&mut self, other: Self) {
        for (key, value) in other {
            self.insert(key, value);
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.iter().map(|(_, v)| v)
    }
}

impl<K, V> FromIterator<(K, V)> for ValueMap
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }

        map
    }
}

impl fmt::Display for ValueMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key:?}: {value}")?;
        }
        f.write_str("}")
    }
}

///
/// value_map!
///
/// Build a `ValueMap` from `key => value` pairs, e.g. update overrides:
/// `value_map! { "y" => 9 }`.
///

#[macro_export]
macro_rules! value_map {
    () => {
        $crate::ValueMap::new()
    };
    ( $( $key:expr => $value:expr ),+ $(,)? ) => {{
        let mut map = $crate::ValueMap::new();
        $(
            map.insert($key, $value);
        )+
        map
    }};
}
