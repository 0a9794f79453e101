//! Ordered column/value mappings.
//!
//! `ColumnValues` is the shape of both a key (the equality/`IS NULL`
//! predicate identifying rows) and row data (the column assignments of an
//! INSERT or UPDATE). Iteration order is significant: it defines the order of
//! `$n` placeholders in the generated statement.

use sea_query::Value;

/// Ordered mapping from column name to value
///
/// # Example
///
/// ```
/// use rowkey::ColumnValues;
///
/// let key = ColumnValues::new()
///     .with("id", 42)
///     .with("parent_id", None::<i32>);
/// assert_eq!(key.column_list(), "id, parent_id");
/// assert_eq!(key.value_list(), "42, null");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnValues {
    entries: Vec<(String, Value)>,
}

impl ColumnValues {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Set a column value.
    ///
    /// A repeated column keeps its original position; new columns append.
    pub fn set<V: Into<Value>>(&mut self, column: &str, value: V) -> &mut Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(name, _)| name == column) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((column.to_string(), value)),
        }
        self
    }

    /// Builder-style [`set`](Self::set).
    pub fn with<V: Into<Value>>(mut self, column: &str, value: V) -> Self {
        self.set(column, value);
        self
    }

    /// Look up a column's value.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Column names joined with `, `, e.g. `id, name`.
    pub fn column_list(&self) -> String {
        self.entries
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Values rendered for error messages, joined with `, `.
    ///
    /// Strings are single-quoted; nulls render as the literal `null`.
    pub fn value_list(&self) -> String {
        self.entries
            .iter()
            .map(|(_, value)| render_value(value))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl IntoIterator for ColumnValues {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(String, Value)> for ColumnValues {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        let mut map = ColumnValues::new();
        for (column, value) in iter {
            map.set(&column, value);
        }
        map
    }
}

/// Whether a value is a typed null.
pub(crate) fn is_null(value: &Value) -> bool {
    matches!(
        value,
        Value::Bool(None)
            | Value::TinyInt(None)
            | Value::SmallInt(None)
            | Value::Int(None)
            | Value::BigInt(None)
            | Value::TinyUnsigned(None)
            | Value::SmallUnsigned(None)
            | Value::Unsigned(None)
            | Value::BigUnsigned(None)
            | Value::Float(None)
            | Value::Double(None)
            | Value::Char(None)
            | Value::String(None)
            | Value::Bytes(None)
            | Value::Json(None)
    )
}

/// Render one value for a human-readable message.
pub(crate) fn render_value(value: &Value) -> String {
    if is_null(value) {
        return "null".to_string();
    }
    match value {
        Value::Bool(Some(v)) => v.to_string(),
        Value::TinyInt(Some(v)) => v.to_string(),
        Value::SmallInt(Some(v)) => v.to_string(),
        Value::Int(Some(v)) => v.to_string(),
        Value::BigInt(Some(v)) => v.to_string(),
        Value::TinyUnsigned(Some(v)) => v.to_string(),
        Value::SmallUnsigned(Some(v)) => v.to_string(),
        Value::Unsigned(Some(v)) => v.to_string(),
        Value::BigUnsigned(Some(v)) => v.to_string(),
        Value::Float(Some(v)) => v.to_string(),
        Value::Double(Some(v)) => v.to_string(),
        Value::Char(Some(v)) => format!("'{v}'"),
        Value::String(Some(v)) => format!("'{v}'"),
        Value::Json(Some(v)) => v.to_string(),
        Value::Bytes(Some(v)) => format!("<{} bytes>", v.len()),
        other => format!("{other:?}"),
    }
}
