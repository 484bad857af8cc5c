//! Database execution abstraction.
//!
//! Generated migrations and seeders run their SQL through the [`SqlExecutor`]
//! trait, so the same artifacts work against a real connection, a transaction
//! wrapper, or a recording executor in tests.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use thiserror::Error;

/// Database execution error.
#[derive(Debug, Error)]
pub enum DbError {
    /// Statement failed to execute
    #[error("query error: {0}")]
    Query(String),
    /// Constraint violation (unique, foreign key, check)
    #[error("constraint violation: {0}")]
    Constraint(String),
    /// Connection-level failure
    #[error("connection error: {0}")]
    Connection(String),
}

/// Trait for executing SQL statements.
///
/// Implementations may talk to a live database or record statements for
/// inspection. `execute` returns the number of rows affected.
pub trait SqlExecutor {
    /// Execute a SQL statement and return the number of rows affected.
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the statement fails. Seeders treat failures as
    /// per-record events and keep going; migrations propagate them.
    fn execute(&mut self, sql: &str) -> Result<u64, DbError>;
}

/// A SQL literal value, rendered inline into generated statements.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Bool(bool),
    Int(i64),
    Decimal(Decimal),
    Text(String),
    Json(serde_json::Value),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
}

impl SqlValue {
    /// Render the value as a SQL literal. Text and JSON values have embedded
    /// single quotes doubled.
    pub fn render(&self) -> String {
        match self {
            SqlValue::Null => "NULL".to_string(),
            SqlValue::Bool(b) => {
                if *b {
                    "TRUE".to_string()
                } else {
                    "FALSE".to_string()
                }
            }
            SqlValue::Int(i) => i.to_string(),
            SqlValue::Decimal(d) => d.to_string(),
            SqlValue::Text(s) => format!("'{}'", s.replace('\'', "''")),
            SqlValue::Json(v) => format!("'{}'", v.to_string().replace('\'', "''")),
            SqlValue::DateTime(dt) => format!("'{}'", dt.format("%Y-%m-%d %H:%M:%S")),
            SqlValue::Date(d) => format!("'{}'", d.format("%Y-%m-%d")),
        }
    }
}

impl From<bool> for SqlValue {
    fn from(v: bool) -> Self {
        SqlValue::Bool(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Int(v)
    }
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        SqlValue::Int(v as i64)
    }
}

impl From<Decimal> for SqlValue {
    fn from(v: Decimal) -> Self {
        SqlValue::Decimal(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        SqlValue::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

impl From<serde_json::Value> for SqlValue {
    fn from(v: serde_json::Value) -> Self {
        SqlValue::Json(v)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(v: NaiveDateTime) -> Self {
        SqlValue::DateTime(v)
    }
}

impl From<NaiveDate> for SqlValue {
    fn from(v: NaiveDate) -> Self {
        SqlValue::Date(v)
    }
}

impl<T> From<Option<T>> for SqlValue
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => SqlValue::Null,
        }
    }
}
