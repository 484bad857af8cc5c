//! Type mapping: abstract column tokens to SQL types, Rust types, and
//! synthetic-data strategies
//!
//! All three mappings are total functions. Unknown tokens pass through
//! uppercased verbatim, so a typo in the registry produces an invalid SQL
//! statement instead of a generation failure; the registry is compiled-in
//! and reviewed, so failing fast here buys little.

use crate::schema::{ColumnDefinition, ColumnType};

/// SQL column type for a column, including length/precision arguments and,
/// for enum columns, the CHECK constraint carrying the literal value list.
pub fn sql_type(column: &ColumnDefinition) -> String {
    match &column.ty {
        ColumnType::Id => "BIGSERIAL".to_string(),
        ColumnType::String => format!("VARCHAR({})", column.length.unwrap_or(255)),
        ColumnType::Text => "TEXT".to_string(),
        ColumnType::LongText => "TEXT".to_string(),
        ColumnType::Integer => "INTEGER".to_string(),
        ColumnType::BigInt => "BIGINT".to_string(),
        ColumnType::TinyInt | ColumnType::SmallInt => "SMALLINT".to_string(),
        ColumnType::Decimal => {
            let (precision, scale) = column.precision.unwrap_or((8, 2));
            format!("NUMERIC({}, {})", precision, scale)
        }
        ColumnType::Boolean => "BOOLEAN".to_string(),
        ColumnType::DateTime | ColumnType::Timestamp => "TIMESTAMP".to_string(),
        ColumnType::Date => "DATE".to_string(),
        ColumnType::Json => "JSONB".to_string(),
        ColumnType::Enum => {
            let values = column
                .values
                .iter()
                .map(|v| format!("'{}'", v.replace('\'', "''")))
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "VARCHAR({}) CHECK ({} IN ({}))",
                column.length.unwrap_or(255),
                column.name,
                values
            )
        }
        ColumnType::ForeignId => "BIGINT".to_string(),
        ColumnType::RememberToken => "VARCHAR(100)".to_string(),
        ColumnType::Other(token) => token.to_uppercase(),
    }
}

/// Rust-side type a model attribute carries, used in generated doc text.
pub fn rust_type(column: &ColumnDefinition) -> &'static str {
    match column.ty {
        ColumnType::Id | ColumnType::BigInt | ColumnType::ForeignId => "i64",
        ColumnType::Integer => "i32",
        ColumnType::TinyInt | ColumnType::SmallInt => "i16",
        ColumnType::Decimal => "Decimal",
        ColumnType::Boolean => "bool",
        ColumnType::DateTime | ColumnType::Timestamp => "NaiveDateTime",
        ColumnType::Date => "NaiveDate",
        ColumnType::Json => "serde_json::Value",
        ColumnType::String
        | ColumnType::Text
        | ColumnType::LongText
        | ColumnType::Enum
        | ColumnType::RememberToken
        | ColumnType::Other(_) => "String",
    }
}

/// Synthetic-data expression for a column, as written into generated
/// seeders.
///
/// An explicit `seed_with` directive on the column wins verbatim. Otherwise
/// string-ish columns go through name heuristics (substring match, checked
/// in order) and every other type falls back to a type-level generator.
/// Foreign keys always synthesize a bounded reference against `fk_ceiling`,
/// regardless of the actual target-table row count.
pub fn seed_expr(column: &ColumnDefinition, fk_ceiling: i64) -> String {
    if let Some(expr) = column.seed_with {
        return expr.to_string();
    }

    let inner = match &column.ty {
        ColumnType::ForeignId => {
            // Nullability is handled here rather than by the generic
            // optional() wrapper so absent parents stay representable.
            if column.nullable {
                return format!("synth::foreign_key_opt({})", fk_ceiling);
            }
            return format!("synth::foreign_key({})", fk_ceiling);
        }
        ColumnType::String | ColumnType::RememberToken => string_expr(column.name),
        ColumnType::Text => "synth::sentence()".to_string(),
        ColumnType::LongText => "synth::paragraph()".to_string(),
        ColumnType::Integer | ColumnType::BigInt => "synth::int_between(1, 100)".to_string(),
        ColumnType::TinyInt | ColumnType::SmallInt => "synth::int_between(0, 10)".to_string(),
        ColumnType::Decimal => "synth::price(1, 500)".to_string(),
        ColumnType::Boolean => "synth::chance(0.5)".to_string(),
        ColumnType::DateTime | ColumnType::Timestamp => "synth::datetime_recent()".to_string(),
        ColumnType::Date => "synth::date_past(30)".to_string(),
        ColumnType::Json => "synth::metadata()".to_string(),
        ColumnType::Enum => {
            let values = column
                .values
                .iter()
                .map(|v| format!("\"{}\"", v))
                .collect::<Vec<_>>()
                .join(", ");
            format!("synth::pick(&[{}])", values)
        }
        ColumnType::Id => "synth::int_between(1, 100)".to_string(),
        ColumnType::Other(_) => "synth::word()".to_string(),
    };

    if column.nullable {
        format!("synth::optional({})", inner)
    } else {
        inner
    }
}

/// Name heuristics for string columns. Order matters: `name` would also
/// match `recipient_name`, so the more specific hints come first.
fn string_expr(name: &str) -> String {
    if name.contains("email") {
        "synth::email()".to_string()
    } else if name.contains("phone") {
        "synth::phone()".to_string()
    } else if name.contains("url") || name.contains("link") {
        "synth::url()".to_string()
    } else if name.contains("slug") {
        "synth::slug()".to_string()
    } else if name.contains("address") {
        "synth::address()".to_string()
    } else if name.contains("name") {
        "synth::name()".to_string()
    } else if name.contains("title") {
        "synth::title()".to_string()
    } else if name.contains("code") {
        "synth::code(\"REF\")".to_string()
    } else {
        "synth::word()".to_string()
    }
}
