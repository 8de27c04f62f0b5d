mod map;
mod wire;


use std::fmt;

// re-exports
pub use map::ValueMap;

///
/// Value
///
/// Generic value carried by the record mapping surface (`to_dict`,
/// `from_dict`, `update`).
///
/// Null        → the field's value is `Option::None`.
/// Map         → ordered string-keyed mapping; nested records use this form.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    Bool(bool),
    Float(f64),
    Int(i64),
    /// Ordered list of values.
    List(Vec<Self>),
    Map(ValueMap),
    #[default]
    Null,
    Text(String),
    Uint(u64),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from owned items.
    pub fn from_list<T>(items: Vec<T>) -> Self
    where
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    ///
    /// TYPES
    ///

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Float(_) | Self::Int(_) | Self::Uint(_))
    }

    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self, Self::List(_) | Self::Map(_))
    }

    /// Short variant label, as shown in `RecordError::InvalidValue`.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Null => "null",
            Self::Text(_) => "text",
            Self::Uint(_) => "uint",
        }
    }

    ///
    /// CONVERSION
    ///

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        if let Self::Bool(b) = self {
            Some(*b)
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(xs) = self {
            Some(xs.as_slice())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_map(&self) -> Option<&ValueMap> {
        if let Self::Map(map) = self {
            Some(map)
        } else {
            None
        }
    }

    /// Signed view of an integer value, if it fits.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            Self::Uint(u) => i64::try_from(*u).ok(),
            _ => None,
        }
    }

    /// Unsigned view of an integer value, if it fits.
    #[must_use]
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Int(i) => u64::try_from(*i).ok(),
            Self::Uint(u) => Some(*u),
            _ => None,
        }
    }

    /// Float view; integers widen (possibly losing precision past 2^53).
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            Self::Uint(u) => Some(*u as f64),
            _ => None,
        }
    }
}

// Rendering used by record representations: null prints as `None`, text is
// quoted.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(map) => write!(f, "{map}"),
            Self::Null => f.write_str("None"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Uint(u) => write!(f, "{u}"),
        }
    }
}

///
/// FROM
///

macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for!(
    bool => Bool,
    f32 => Float,
    f64 => Float,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => Uint,
    u16 => Uint,
    u32 => Uint,
    u64 => Uint,
    String => Text,
    ValueMap => Map,
);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::from_list(items)
    }
}
