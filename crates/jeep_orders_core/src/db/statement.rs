//! Typed statement builders.
//!
//! # Responsibility
//! - Render SQL text and its named bindings from the same column list.
//! - Keep placeholder naming (`:column`, `:column_N`) in one place.
//!
//! # Invariants
//! - Every placeholder in `Statement::sql` has exactly one binding.
//! - Values are bound, never interpolated.

use crate::db::decimal_to_value;
use crate::model::jeep::JeepModel;
use rust_decimal::Decimal;
use rusqlite::types::Value;

/// Conversion into a bindable SQLite value.
pub trait IntoSqlValue {
    fn into_sql_value(self) -> Value;
}

impl IntoSqlValue for i64 {
    fn into_sql_value(self) -> Value {
        Value::Integer(self)
    }
}

impl IntoSqlValue for u32 {
    fn into_sql_value(self) -> Value {
        Value::Integer(i64::from(self))
    }
}

impl IntoSqlValue for &str {
    fn into_sql_value(self) -> Value {
        Value::Text(self.to_string())
    }
}

impl IntoSqlValue for &String {
    fn into_sql_value(self) -> Value {
        Value::Text(self.clone())
    }
}

impl IntoSqlValue for Decimal {
    fn into_sql_value(self) -> Value {
        decimal_to_value(self)
    }
}

impl IntoSqlValue for JeepModel {
    fn into_sql_value(self) -> Value {
        Value::Text(self.as_str().to_string())
    }
}

/// Rendered SQL plus its named bindings.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<(String, Value)>,
}

impl Statement {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Bindings in placeholder order. Names carry the leading `:`.
    pub fn params(&self) -> &[(String, Value)] {
        &self.params
    }

    /// Looks up one binding by placeholder name (with or without `:`).
    pub fn param(&self, name: &str) -> Option<&Value> {
        let wanted = name.strip_prefix(':').unwrap_or(name);
        self.params
            .iter()
            .find(|(key, _)| &key[1..] == wanted)
            .map(|(_, value)| value)
    }
}

/// `SELECT` builder over one table with an optional inner join.
#[derive(Debug, Clone)]
pub struct Select {
    table: &'static str,
    columns: &'static [&'static str],
    joins: Vec<String>,
    filters: Vec<String>,
    order_by: Option<&'static str>,
    params: Vec<(String, Value)>,
}

impl Select {
    pub fn from(table: &'static str, columns: &'static [&'static str]) -> Self {
        Self {
            table,
            columns,
            joins: Vec::new(),
            filters: Vec::new(),
            order_by: None,
            params: Vec::new(),
        }
    }

    /// Adds `INNER JOIN <table> ON <on>`. Selected columns stay qualified by
    /// the primary table.
    pub fn inner_join(mut self, table: &'static str, on: &'static str) -> Self {
        self.joins.push(format!("INNER JOIN {table} ON {on}"));
        self
    }

    /// Adds `column = :column`.
    pub fn filter_eq(mut self, column: &'static str, value: impl IntoSqlValue) -> Self {
        let placeholder = placeholder_for(column);
        self.filters.push(format!("{column} = {placeholder}"));
        self.params.push((placeholder, value.into_sql_value()));
        self
    }

    /// Adds `column IN (:column_0, :column_1, ...)`.
    ///
    /// An empty value list renders as a false predicate so the SQL stays
    /// valid; callers are expected to short-circuit before that.
    pub fn filter_in<I, V>(mut self, column: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: IntoSqlValue,
    {
        let base = placeholder_for(column);
        let mut placeholders = Vec::new();
        for (index, value) in values.into_iter().enumerate() {
            let placeholder = format!("{base}_{index}");
            placeholders.push(placeholder.clone());
            self.params.push((placeholder, value.into_sql_value()));
        }

        if placeholders.is_empty() {
            self.filters.push("1 = 0".to_string());
        } else {
            self.filters
                .push(format!("{column} IN ({})", placeholders.join(", ")));
        }
        self
    }

    pub fn order_by(mut self, column: &'static str) -> Self {
        self.order_by = Some(column);
        self
    }

    pub fn build(self) -> Statement {
        let columns = self
            .columns
            .iter()
            .map(|column| format!("{}.{column}", self.table))
            .collect::<Vec<_>>()
            .join(", ");
        let mut sql = format!("SELECT {columns} FROM {}", self.table);
        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }
        if !self.filters.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&self.filters.join(" AND "));
        }
        if let Some(column) = self.order_by {
            sql.push_str(" ORDER BY ");
            sql.push_str(column);
        }

        Statement {
            sql,
            params: self.params,
        }
    }
}

/// `INSERT` builder; each column is bound to `:column`.
#[derive(Debug, Clone)]
pub struct Insert {
    table: &'static str,
    columns: Vec<&'static str>,
    params: Vec<(String, Value)>,
}

impl Insert {
    pub fn into(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn value(mut self, column: &'static str, value: impl IntoSqlValue) -> Self {
        self.columns.push(column);
        self.params
            .push((placeholder_for(column), value.into_sql_value()));
        self
    }

    pub fn build(self) -> Statement {
        let placeholders = self
            .params
            .iter()
            .map(|(name, _)| name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Statement {
            sql: format!(
                "INSERT INTO {} ({}) VALUES ({placeholders})",
                self.table,
                self.columns.join(", ")
            ),
            params: self.params,
        }
    }
}

fn placeholder_for(column: &str) -> String {
    format!(":{}", column.replace('.', "_"))
}
