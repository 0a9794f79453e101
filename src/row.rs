//! Returned records and typed value extraction.
//!
//! A [`Row`] is one record produced by the executor from a SELECT or a
//! `RETURNING` clause. Values come back as [`sea_query::Value`]; the
//! [`ValueType`] trait converts them to concrete Rust types.

use std::fmt;

use sea_query::Value;

/// A single returned record as a column-name-to-value mapping
///
/// Column order is preserved as reported by the executor but carries no
/// meaning; lookups are by name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    columns: Vec<(String, Value)>,
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self { columns: Vec::new() }
    }

    /// Create a row from `(column, value)` pairs.
    pub fn from_pairs(columns: Vec<(String, Value)>) -> Self {
        Self { columns }
    }

    /// Builder-style column append, mainly for executor implementations and
    /// tests.
    pub fn with<V: Into<Value>>(mut self, column: &str, value: V) -> Self {
        self.columns.push((column.to_string(), value.into()));
        self
    }

    /// Look up a column's raw value.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Extract a column as a concrete type.
    ///
    /// Use `Option<T>` as the target type for nullable columns; a typed null
    /// then extracts as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ValueExtractError`] if the column is absent or its value
    /// does not convert to `T`.
    ///
    /// # Example
    ///
    /// ```
    /// use rowkey::Row;
    ///
    /// let row = Row::new().with("id", 7).with("parent_id", None::<i32>);
    /// assert_eq!(row.try_get::<i32>("id").unwrap(), 7);
    /// assert_eq!(row.try_get::<Option<i32>>("parent_id").unwrap(), None);
    /// ```
    pub fn try_get<T: ValueType>(&self, column: &str) -> Result<T, ValueExtractError> {
        let value = self
            .get(column)
            .ok_or_else(|| ValueExtractError::Missing(column.to_string()))?;
        T::from_value(value.clone())
            .ok_or_else(|| ValueExtractError::TypeMismatch(column.to_string()))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate columns in the order the executor reported them.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl IntoIterator for Row {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

/// Error extracting a typed value from a [`Row`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueExtractError {
    /// The named column is not present in the row
    Missing(String),
    /// The column's value does not convert to the requested type
    TypeMismatch(String),
}

impl fmt::Display for ValueExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueExtractError::Missing(column) => {
                write!(f, "column \"{column}\" not present in row")
            }
            ValueExtractError::TypeMismatch(column) => {
                write!(f, "column \"{column}\" has an unexpected type")
            }
        }
    }
}

impl std::error::Error for ValueExtractError {}

/// Conversion between concrete Rust types and [`sea_query::Value`]
pub trait ValueType: Sized {
    /// Convert this value into a `Value`.
    fn into_value(self) -> Value;

    /// Convert a `Value` into this type, if the variant matches.
    fn from_value(value: Value) -> Option<Self>;

    /// The typed-null `Value` variant for this type.
    fn null_value() -> Value;
}

macro_rules! impl_value_type {
    ($type:ty, $variant:ident) => {
        impl ValueType for $type {
            fn into_value(self) -> Value {
                Value::$variant(Some(self))
            }

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => v,
                    _ => None,
                }
            }

            fn null_value() -> Value {
                Value::$variant(None)
            }
        }
    };
}

impl_value_type!(bool, Bool);
impl_value_type!(i16, SmallInt);
impl_value_type!(i32, Int);
impl_value_type!(i64, BigInt);
impl_value_type!(f32, Float);
impl_value_type!(f64, Double);
impl_value_type!(String, String);
impl_value_type!(Vec<u8>, Bytes);

impl ValueType for serde_json::Value {
    fn into_value(self) -> Value {
        Value::Json(Some(Box::new(self)))
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Json(Some(v)) => Some(*v),
            _ => None,
        }
    }

    fn null_value() -> Value {
        Value::Json(None)
    }
}

impl<T: ValueType> ValueType for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => T::null_value(),
        }
    }

    fn from_value(value: Value) -> Option<Self> {
        if value == T::null_value() {
            return Some(None);
        }
        T::from_value(value).map(Some)
    }

    fn null_value() -> Value {
        T::null_value()
    }
}
