//! Model generation
//!
//! One file per non-pivot table: a unit struct implementing
//! `cartwright::Model` with the table's fillable/hidden/cast metadata,
//! inherent accessor methods for declared relationships, typed accessors
//! for enum casts, and scope constructors. The render is driven entirely by
//! the canonical registry, so the enum generator can re-render a model and
//! get byte-identical output when nothing changed.

use crate::error::GenError;
use crate::inflect;
use crate::schema::{
    ColumnType, RelationshipDefinition, RelationshipKind, SchemaRegistry, ScopePredicate,
    TableDefinition,
};
use crate::typemap;
use crate::writer::{filter_tables, GenSummary, Materializer};
use std::fmt::Write as _;
use std::path::Path;

pub fn generate(
    registry: &SchemaRegistry,
    dir: &Path,
    tables: &[String],
    force: bool,
) -> Result<GenSummary, GenError> {
    let mut materializer = Materializer::new(force);
    for table in filter_tables(registry, tables) {
        if table.is_pivot() {
            log::warn!(
                "table '{}' is a pivot table, no model is generated",
                table.name
            );
            materializer.summary.skipped += 1;
            continue;
        }
        let path = dir.join(format!("{}.rs", inflect::model_file(table.name)));
        materializer.write_new(&path, &render_model(registry, table), false)?;
    }
    Ok(materializer.summary)
}

/// Render one model file from the canonical registry.
pub fn render_model(registry: &SchemaRegistry, table: &TableDefinition) -> String {
    let model = inflect::model_name(table.name);
    let bound_enums = registry.enums_for_table(table.name);
    let casts = cast_entries(registry, table);

    let mut out = String::new();
    out.push_str("//! Generated by cartwright-codegen - do not edit manually.\n//!\n");
    let _ = writeln!(out, "//! Model for the `{}` table: {}", table.name, table.comment);
    out.push_str("//!\n//! Attributes:\n");
    for column in &table.columns {
        if column.ty == ColumnType::Id || column.is_reserved_timestamp() {
            continue;
        }
        let _ = writeln!(
            out,
            "//! - `{}`: {}{}",
            column.name,
            typemap::rust_type(column),
            if column.nullable { " (nullable)" } else { "" }
        );
    }
    out.push('\n');

    // Imports: the Model machinery, conditional markers, one line per bound
    // enum type.
    let mut traits = vec!["Cast", "Model"];
    if !table.relationships.is_empty() {
        traits.push("Relation");
    }
    if !table.scopes.is_empty() {
        traits.insert(1, "Condition");
    }
    if table.notifiable {
        traits.push("Notifiable");
    }
    if table.has_soft_deletes() {
        traits.push("SoftDeletes");
    }
    traits.sort_unstable();
    let _ = writeln!(out, "use cartwright::model::{{{}}};", traits.join(", "));
    for def in &bound_enums {
        let _ = writeln!(
            out,
            "use crate::enums::{}::{};",
            inflect::snake(def.enum_name),
            def.enum_name
        );
    }
    out.push('\n');

    let _ = writeln!(out, "#[derive(Debug, Clone, Copy, Default)]");
    let _ = writeln!(out, "pub struct {};\n", model);

    let _ = writeln!(out, "impl Model for {} {{", model);
    let _ = writeln!(out, "    const TABLE: &'static str = \"{}\";", table.name);
    let _ = writeln!(
        out,
        "    const PRIMARY_KEY: &'static [&'static str] = &[{}];",
        quote_list(&table.primary_key_columns())
    );
    let _ = writeln!(
        out,
        "    const FILLABLE: &'static [&'static str] = &[{}];",
        quote_list(&table.fillable())
    );
    let _ = writeln!(
        out,
        "    const HIDDEN: &'static [&'static str] = &[{}];",
        quote_list(&table.hidden)
    );
    if casts.is_empty() {
        out.push_str("    const CASTS: &'static [(&'static str, Cast)] = &[];\n");
    } else {
        out.push_str("    const CASTS: &'static [(&'static str, Cast)] = &[\n");
        for (column, cast) in &casts {
            let _ = writeln!(out, "        (\"{}\", {}),", column, cast);
        }
        out.push_str("    ];\n");
    }
    out.push_str("}\n");

    if table.has_soft_deletes() {
        let _ = writeln!(out, "\nimpl SoftDeletes for {} {{}}", model);
    }
    if table.notifiable {
        let _ = writeln!(out, "\nimpl Notifiable for {} {{}}", model);
    }

    let has_body = !table.relationships.is_empty()
        || !table.scopes.is_empty()
        || !bound_enums.is_empty();
    if has_body {
        let _ = writeln!(out, "\nimpl {} {{", model);
        let mut first = true;
        for rel in &table.relationships {
            if !first {
                out.push('\n');
            }
            first = false;
            out.push_str(&relation_method(rel));
        }
        for def in &bound_enums {
            if !first {
                out.push('\n');
            }
            first = false;
            let _ = writeln!(out, "    /// Typed accessor for the `{}` cast.", def.column);
            let _ = writeln!(
                out,
                "    pub fn {}_from(value: &str) -> Option<{}> {{",
                def.column, def.enum_name
            );
            let _ = writeln!(out, "        {}::from_value(value)", def.enum_name);
            out.push_str("    }\n");
        }
        for scope in &table.scopes {
            if !first {
                out.push('\n');
            }
            first = false;
            match &scope.predicate {
                ScopePredicate::Eq(value) => {
                    let _ = writeln!(
                        out,
                        "    /// Scope: rows where `{} = '{}'`.",
                        scope.column, value
                    );
                    let _ = writeln!(out, "    pub fn {}() -> Condition {{", scope.name);
                    let _ = writeln!(
                        out,
                        "        Condition::eq(\"{}\", \"{}\")",
                        scope.column, value
                    );
                }
                ScopePredicate::IsNull => {
                    let _ = writeln!(
                        out,
                        "    /// Scope: rows where `{}` is NULL.",
                        scope.column
                    );
                    let _ = writeln!(out, "    pub fn {}() -> Condition {{", scope.name);
                    let _ = writeln!(out, "        Condition::is_null(\"{}\")", scope.column);
                }
            }
            out.push_str("    }\n");
        }
        out.push_str("}\n");
    }
    out
}

fn relation_method(rel: &RelationshipDefinition) -> String {
    let constructor = match rel.kind {
        RelationshipKind::BelongsTo => "belongs_to",
        RelationshipKind::HasMany => "has_many",
        RelationshipKind::HasOne => "has_one",
        RelationshipKind::BelongsToMany => "belongs_to_many",
        RelationshipKind::MorphTo => "morph_to",
    };
    let mut expr = format!("Relation::{}(\"{}\")", constructor, rel.target);
    if let Some(pivot) = rel.pivot {
        let _ = write!(expr, ".pivot(\"{}\")", pivot);
    }
    if let Some(key) = rel.foreign_key {
        let _ = write!(expr, ".foreign_key(\"{}\")", key);
    }
    if let Some((column, value)) = rel.condition_parts() {
        let _ = write!(expr, ".filter(\"{}\", \"{}\")", column, value);
    }
    format!(
        "    pub fn {}(&self) -> Relation {{\n        {}\n    }}\n",
        rel.name, expr
    )
}

/// Cast entries in column declaration order. Enum bindings come from the
/// registry; everything else derives from the column type.
fn cast_entries(registry: &SchemaRegistry, table: &TableDefinition) -> Vec<(&'static str, String)> {
    let mut casts = Vec::new();
    for column in &table.columns {
        if column.ty == ColumnType::Id || column.is_reserved_timestamp() {
            continue;
        }
        if let Some(def) = registry.enum_for_column(table.name, column.name) {
            casts.push((column.name, format!("Cast::Enum(\"{}\")", def.enum_name)));
            continue;
        }
        let cast = match column.ty {
            ColumnType::Date => Some("Cast::Date".to_string()),
            ColumnType::DateTime | ColumnType::Timestamp => Some("Cast::DateTime".to_string()),
            ColumnType::Decimal => {
                let (_, scale) = column.precision.unwrap_or((8, 2));
                Some(format!("Cast::Decimal({})", scale))
            }
            ColumnType::Json => Some("Cast::Json".to_string()),
            ColumnType::Boolean => Some("Cast::Bool".to_string()),
            _ => None,
        };
        if let Some(cast) = cast {
            casts.push((column.name, cast));
        }
    }
    casts
}

fn quote_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("\"{}\"", item))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::registry;

    #[test]
    fn test_render_user_model() {
        let reg = registry();
        let code = render_model(reg, reg.table("users").unwrap());

        assert!(code.contains("pub struct User;"));
        assert!(code.contains("const TABLE: &'static str = \"users\";"));
        assert!(code.contains("const PRIMARY_KEY: &'static [&'static str] = &[\"id\"];"));
        assert!(code.contains("const HIDDEN: &'static [&'static str] = &[\"password\", \"remember_token\"];"));
        assert!(code.contains("impl Notifiable for User {}"));
        assert!(!code.contains("SoftDeletes"));
        // Fillable excludes id and reserved timestamps.
        assert!(!code.contains("\"id\", "));
        assert!(!code.contains("\"created_at\""));
    }

    #[test]
    fn test_enum_casts_and_typed_accessors() {
        let reg = registry();
        let code = render_model(reg, reg.table("orders").unwrap());

        assert_eq!(code.matches("use crate::enums::order_status::OrderStatus;").count(), 1);
        assert_eq!(code.matches("(\"status\", Cast::Enum(\"OrderStatus\")),").count(), 1);
        assert!(code.contains("(\"payment_status\", Cast::Enum(\"PaymentStatus\")),"));
        assert!(code.contains("(\"payment_method\", Cast::Enum(\"PaymentMethod\")),"));
        assert!(code.contains("pub fn status_from(value: &str) -> Option<OrderStatus>"));
        assert!(code.contains("(\"total\", Cast::Decimal(2)),"));
    }

    #[test]
    fn test_relationship_accessors() {
        let reg = registry();
        let code = render_model(reg, reg.table("divisions").unwrap());

        assert!(code.contains(
            "Relation::has_many(\"Division\").foreign_key(\"parent_id\").filter(\"division_type\", \"ward\")"
        ));
        assert!(code.contains("pub fn provinces() -> Condition"));
        assert!(code.contains("Condition::eq(\"division_type\", \"province\")"));
    }

    #[test]
    fn test_belongs_to_many_carries_pivot() {
        let reg = registry();
        let code = render_model(reg, reg.table("users").unwrap());
        assert!(code.contains("Relation::belongs_to_many(\"Product\").pivot(\"wishlists\")"));
    }

    #[test]
    fn test_morph_to_accessor() {
        let reg = registry();
        let code = render_model(reg, reg.table("notifications").unwrap());
        assert!(code.contains("pub fn notifiable(&self) -> Relation"));
        assert!(code.contains("Relation::morph_to(\"notifiable\")"));
    }

    #[test]
    fn test_soft_deleted_model_gets_marker() {
        let reg = registry();
        let code = render_model(reg, reg.table("shops").unwrap());
        assert!(code.contains("impl SoftDeletes for Shop {}"));
    }

    #[test]
    fn test_header_documents_attribute_types() {
        let reg = registry();
        let code = render_model(reg, reg.table("orders").unwrap());

        assert!(code.contains("//! Attributes:"));
        assert!(code.contains("//! - `user_id`: i64"));
        assert!(code.contains("//! - `total`: Decimal"));
        assert!(code.contains("//! - `note`: String (nullable)"));
        // Identity and reserved timestamps are not attributes.
        assert!(!code.contains("//! - `id`"));
        assert!(!code.contains("//! - `created_at`"));
    }

    #[test]
    fn test_null_scope_renders_is_null_condition() {
        let reg = registry();
        let code = render_model(reg, reg.table("notifications").unwrap());

        assert!(code.contains("pub fn unread() -> Condition"));
        assert!(code.contains("Condition::is_null(\"read_at\")"));
        // An equality test against a 'null' literal would never match a
        // NULL column value.
        assert!(!code.contains("Condition::eq(\"read_at\""));
    }

    #[test]
    fn test_render_is_deterministic() {
        let reg = registry();
        let table = reg.table("products").unwrap();
        assert_eq!(render_model(reg, table), render_model(reg, table));
    }
}
