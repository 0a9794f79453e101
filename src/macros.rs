//! Convenience macros.

/// Build a [`ColumnValues`](crate::ColumnValues) literal.
///
/// Entries keep their written order, which is also placeholder order in the
/// generated statements. Any value convertible into
/// [`Value`](crate::Value) works on the right-hand side; use a typed
/// `None` for nulls.
///
/// # Example
///
/// ```
/// use rowkey::columns;
///
/// let key = columns! { "id" => 1, "parent_id" => None::<i32> };
/// assert_eq!(key.column_list(), "id, parent_id");
/// assert_eq!(key.value_list(), "1, null");
/// ```
#[macro_export]
macro_rules! columns {
    () => {
        $crate::ColumnValues::new()
    };
    ($($column:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::ColumnValues::new();
        $(map.set($column, $value);)+
        map
    }};
}
