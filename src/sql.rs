//! Statement text and parameter-list construction.
//!
//! Each builder returns a [`Statement`]: the SQL text with `$n` placeholders
//! and the parameter list in placeholder order. Table and column identifiers
//! are interpolated verbatim and must come from trusted input.
//!
//! Key predicates come in two flavors. Lookups use the null-aware form: a
//! null-valued entry compiles to `col IS NULL` and its parameter slot is
//! filled with the constant `1`, so later entries keep `$n = position`
//! numbering. Mutations (UPDATE/DELETE) address rows by primary key and use
//! plain equality throughout.

use sea_query::Value;

use crate::key::{is_null, ColumnValues};

/// One buildable statement: SQL text plus its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Statement {
    pub(crate) text: String,
    pub(crate) params: Vec<Value>,
}

fn projection<S: AsRef<str>>(columns: Option<&[S]>) -> String {
    match columns {
        Some(columns) => columns
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(", "),
        None => "*".to_string(),
    }
}

fn null_aware_predicate(key: &ColumnValues, start: usize, params: &mut Vec<Value>) -> String {
    let mut clauses = Vec::with_capacity(key.len());
    for (offset, (column, value)) in key.iter().enumerate() {
        if is_null(value) {
            clauses.push(format!("{column} IS NULL"));
            // constant slot keeps $n aligned with clause positions
            params.push(Value::Int(Some(1)));
        } else {
            clauses.push(format!("{column} = ${}", start + offset));
            params.push(value.clone());
        }
    }
    clauses.join(" AND ")
}

fn equality_predicate(key: &ColumnValues, start: usize, params: &mut Vec<Value>) -> String {
    let mut clauses = Vec::with_capacity(key.len());
    for (offset, (column, value)) in key.iter().enumerate() {
        clauses.push(format!("{column} = ${}", start + offset));
        params.push(value.clone());
    }
    clauses.join(" AND ")
}

/// `SELECT <cols|*> FROM <table> WHERE <key> [LIMIT 1][ FOR UPDATE]`
pub(crate) fn select_by_key(
    table: &str,
    key: &ColumnValues,
    columns: Option<&[String]>,
    limit_one: bool,
    for_update: bool,
) -> Statement {
    let mut params = Vec::with_capacity(key.len());
    let predicate = null_aware_predicate(key, 1, &mut params);
    let mut text = format!(
        "SELECT {} FROM {} WHERE {}",
        projection(columns),
        table,
        predicate
    );
    if limit_one {
        text.push_str(" LIMIT 1");
    }
    if for_update {
        text.push_str(" FOR UPDATE");
    }
    Statement { text, params }
}

/// `INSERT INTO <table> (<cols>) VALUES ($1, ...) RETURNING <cols|*>`, or the
/// `VALUES (default)` form when `data` is empty.
pub(crate) fn insert(table: &str, data: &ColumnValues, returning: Option<&[&str]>) -> Statement {
    let returning = projection(returning);
    if data.is_empty() {
        return Statement {
            text: format!("INSERT INTO {table} VALUES (default) RETURNING {returning}"),
            params: Vec::new(),
        };
    }
    let placeholders = (1..=data.len())
        .map(|n| format!("${n}"))
        .collect::<Vec<_>>()
        .join(", ");
    let text = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        table,
        data.column_list(),
        placeholders,
        returning
    );
    let params = data.iter().map(|(_, value)| value.clone()).collect();
    Statement { text, params }
}

/// `UPDATE <table> SET c = $1, ... WHERE k = $n ... RETURNING <cols|*>`
///
/// Data values bind first, key values second, so WHERE placeholders start
/// after all SET placeholders.
pub(crate) fn update(
    table: &str,
    key: &ColumnValues,
    data: &ColumnValues,
    returning: Option<&[&str]>,
) -> Statement {
    let mut params: Vec<Value> = Vec::with_capacity(data.len() + key.len());
    let assignments = data
        .iter()
        .enumerate()
        .map(|(offset, (column, _))| format!("{column} = ${}", offset + 1))
        .collect::<Vec<_>>()
        .join(", ");
    params.extend(data.iter().map(|(_, value)| value.clone()));
    let predicate = equality_predicate(key, data.len() + 1, &mut params);
    let text = format!(
        "UPDATE {} SET {} WHERE {} RETURNING {}",
        table,
        assignments,
        predicate,
        projection(returning)
    );
    Statement { text, params }
}

/// `DELETE FROM <table> WHERE k = $1 ...`
pub(crate) fn delete(table: &str, key: &ColumnValues) -> Statement {
    let mut params = Vec::with_capacity(key.len());
    let predicate = equality_predicate(key, 1, &mut params);
    Statement {
        text: format!("DELETE FROM {table} WHERE {predicate}"),
        params,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_single_column_key() {
        let key = ColumnValues::new().with("id", 1);
        let statement = select_by_key("t", &key, None, true, false);
        assert_eq!(statement.text, "SELECT * FROM t WHERE id = $1 LIMIT 1");
        assert_eq!(statement.params, vec![Value::Int(Some(1))]);
    }

    #[test]
    fn test_select_null_key_aligns_placeholders() {
        let key = ColumnValues::new()
            .with("parent_id", None::<i32>)
            .with("name", "Joe");
        let statement = select_by_key("t", &key, None, true, false);
        assert_eq!(
            statement.text,
            "SELECT * FROM t WHERE parent_id IS NULL AND name = $2 LIMIT 1"
        );
        // the null slot is padded with the constant 1 so $2 stays position 2
        assert_eq!(
            statement.params,
            vec![Value::Int(Some(1)), Value::from("Joe")]
        );
    }

    #[test]
    fn test_select_projection_and_for_update() {
        let key = ColumnValues::new().with("name", "Joe");
        let columns = vec!["name".to_string(), "id".to_string()];
        let statement = select_by_key("t", &key, Some(&columns), true, true);
        assert_eq!(
            statement.text,
            "SELECT name, id FROM t WHERE name = $1 LIMIT 1 FOR UPDATE"
        );
    }

    #[test]
    fn test_select_count_form_has_no_limit() {
        let key = ColumnValues::new().with("parent_id", 1);
        let statement = select_by_key("t", &key, None, false, false);
        assert_eq!(statement.text, "SELECT * FROM t WHERE parent_id = $1");
    }

    #[test]
    fn test_insert() {
        let data = ColumnValues::new().with("name", "Ann").with("parent_id", 1);
        let statement = insert("t", &data, None);
        assert_eq!(
            statement.text,
            "INSERT INTO t (name, parent_id) VALUES ($1, $2) RETURNING *"
        );
        assert_eq!(
            statement.params,
            vec![Value::from("Ann"), Value::Int(Some(1))]
        );
    }

    #[test]
    fn test_insert_empty_data_uses_defaults() {
        let statement = insert("t", &ColumnValues::new(), None);
        assert_eq!(statement.text, "INSERT INTO t VALUES (default) RETURNING *");
        assert!(statement.params.is_empty());
    }

    #[test]
    fn test_insert_returning_projection() {
        let data = ColumnValues::new().with("name", "Ann");
        let statement = insert("t", &data, Some(&["id", "name"]));
        assert_eq!(
            statement.text,
            "INSERT INTO t (name) VALUES ($1) RETURNING id, name"
        );
    }

    #[test]
    fn test_update_set_uses_comma_and_offsets_where() {
        let key = ColumnValues::new().with("id", 3);
        let data = ColumnValues::new().with("name", "Ann2").with("active", true);
        let statement = update("t", &key, &data, None);
        assert_eq!(
            statement.text,
            "UPDATE t SET name = $1, active = $2 WHERE id = $3 RETURNING *"
        );
        assert_eq!(
            statement.params,
            vec![Value::from("Ann2"), Value::Bool(Some(true)), Value::Int(Some(3))]
        );
    }

    #[test]
    fn test_update_composite_key() {
        let key = ColumnValues::new().with("a", 1).with("b", 2);
        let data = ColumnValues::new().with("c", 3);
        let statement = update("t", &key, &data, Some(&["c"]));
        assert_eq!(
            statement.text,
            "UPDATE t SET c = $1 WHERE a = $2 AND b = $3 RETURNING c"
        );
    }

    #[test]
    fn test_delete() {
        let key = ColumnValues::new().with("id", 3);
        let statement = delete("t", &key);
        assert_eq!(statement.text, "DELETE FROM t WHERE id = $1");
        assert_eq!(statement.params, vec![Value::Int(Some(3))]);
    }
}
