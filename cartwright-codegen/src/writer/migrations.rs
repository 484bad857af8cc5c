//! Migration generation
//!
//! One file per table: a struct implementing `cartwright::migration::
//! Migration` whose `up` creates the table, its indexes, and its comment,
//! and whose `down` drops them in reverse. The filename counter is shared
//! across the run and resumes above the highest counter already on disk, so
//! a table added between runs gets the next unused value. A table whose
//! `_create_{table}_table.rs` file already exists is skipped silently and
//! consumes no counter; this generator has no force override.

use crate::error::GenError;
use crate::inflect;
use crate::schema::{ColumnDefinition, ColumnType, PrimaryKey, SchemaRegistry, TableDefinition};
use crate::typemap;
use crate::writer::{GenSummary, Materializer};
use cartwright::migration::highest_counter;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

pub fn generate(
    registry: &SchemaRegistry,
    dir: &Path,
    date: &str,
    start: u32,
) -> Result<GenSummary, GenError> {
    let resume = highest_counter(dir)?.map(|c| c + 1).unwrap_or(0);
    let mut counter = start.max(resume);

    let mut materializer = Materializer::new(false);
    for table in registry.tables() {
        if migration_exists(dir, table.name) {
            materializer.summary.skipped += 1;
            continue;
        }
        let filename = format!("m{}_{:06}_create_{}_table.rs", date, counter, table.name);
        let contents = render_migration(table, date, counter);
        materializer.write_new(&dir.join(filename), &contents, true)?;
        counter += 1;
    }
    Ok(materializer.summary)
}

/// A migration for `table` exists under any counter value.
fn migration_exists(dir: &Path, table: &str) -> bool {
    let suffix = format!("_create_{}_table.rs", table);
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return false,
    };
    entries
        .filter_map(|e| e.ok())
        .filter_map(|e| e.file_name().into_string().ok())
        .any(|name| name.ends_with(&suffix))
}

/// Render one migration file.
pub fn render_migration(table: &TableDefinition, date: &str, counter: u32) -> String {
    let name = format!("create_{}_table", table.name);
    let struct_name = format!("Create{}Table", inflect::studly(table.name));
    let version: i64 = format!("{}{:06}", date.replace('_', ""), counter)
        .parse()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "//! Migration: {}", name);
    let _ = writeln!(out, "//! Version: {}", version);
    if !table.comment.is_empty() {
        let _ = writeln!(out, "//!\n//! {}", table.comment);
    }
    out.push('\n');
    out.push_str("use cartwright::db::DbError;\n");
    out.push_str("use cartwright::migration::{Migration, SchemaManager};\n\n");
    let _ = writeln!(out, "pub struct {};\n", struct_name);
    let _ = writeln!(out, "impl Migration for {} {{", struct_name);
    out.push_str("    fn name(&self) -> &str {\n");
    let _ = writeln!(out, "        \"{}\"", name);
    out.push_str("    }\n\n");
    out.push_str("    fn version(&self) -> i64 {\n");
    let _ = writeln!(out, "        {}", version);
    out.push_str("    }\n\n");

    // up(): CREATE TABLE, then indexes, then the comment
    out.push_str("    fn up(&self, manager: &mut SchemaManager<'_>) -> Result<(), DbError> {\n");
    out.push_str("        manager.execute(\n            r#\"\n");
    let _ = writeln!(out, "            CREATE TABLE IF NOT EXISTS {} (", table.name);
    let body = body_lines(table);
    for (i, line) in body.iter().enumerate() {
        let comma = if i + 1 < body.len() { "," } else { "" };
        let _ = writeln!(out, "                {}{}", line, comma);
    }
    out.push_str("            )\n            \"#,\n        )?;\n");
    for index in &table.indexes {
        let unique = if index.unique { "UNIQUE " } else { "" };
        let _ = writeln!(
            out,
            "        manager.execute(\n            \"CREATE {}INDEX IF NOT EXISTS {} ON {}({})\",\n        )?;",
            unique,
            index.name(table.name),
            table.name,
            index.columns.join(", ")
        );
    }
    if !table.comment.is_empty() {
        let _ = writeln!(
            out,
            "        manager.execute(\"COMMENT ON TABLE {} IS '{}'\")?;",
            table.name,
            table.comment.replace('\'', "''")
        );
    }
    out.push_str("        Ok(())\n    }\n\n");

    // down(): drop indexes first, then the table
    out.push_str("    fn down(&self, manager: &mut SchemaManager<'_>) -> Result<(), DbError> {\n");
    for index in table.indexes.iter().rev() {
        let _ = writeln!(
            out,
            "        manager.execute(\"DROP INDEX IF EXISTS {}\")?;",
            index.name(table.name)
        );
    }
    let _ = writeln!(
        out,
        "        manager.execute(\"DROP TABLE IF EXISTS {}\")?;",
        table.name
    );
    out.push_str("        Ok(())\n    }\n}\n");
    out
}

/// Column and constraint lines inside CREATE TABLE, without trailing commas.
fn body_lines(table: &TableDefinition) -> Vec<String> {
    let composite = table.has_composite_key();
    let has_timestamps = table.has_timestamps();
    let has_soft_deletes = table.has_soft_deletes();

    let mut lines = Vec::new();
    for column in &table.columns {
        if column.is_reserved_timestamp() {
            continue;
        }
        // Composite-key tables never carry the implicit auto-increment id.
        if composite && column.ty == ColumnType::Id {
            continue;
        }
        lines.push(column_sql(column));
    }
    if has_timestamps {
        lines.push("created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP".to_string());
        lines.push("updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP".to_string());
    }
    if has_soft_deletes {
        lines.push("deleted_at TIMESTAMP NULL".to_string());
    }
    if let PrimaryKey::Composite(key) = &table.primary_key {
        lines.push(format!("PRIMARY KEY ({})", key.join(", ")));
    }
    lines
}

fn column_sql(column: &ColumnDefinition) -> String {
    if column.ty == ColumnType::Id {
        return format!("{} BIGSERIAL PRIMARY KEY", column.name);
    }

    let mut sql = format!("{} {}", column.name, typemap::sql_type(column));
    // Nullability precedes constraint attachment: NULL/NOT NULL, then
    // UNIQUE, then REFERENCES, then ON DELETE.
    sql.push_str(if column.nullable { " NULL" } else { " NOT NULL" });
    if let Some(default) = column.default {
        let _ = write!(sql, " DEFAULT {}", default);
    }
    if column.unique {
        sql.push_str(" UNIQUE");
    }
    if column.ty == ColumnType::ForeignId {
        if let Some(target) = column.references {
            let _ = write!(sql, " REFERENCES {}(id)", target);
            if let Some(action) = column.on_delete {
                let _ = write!(sql, " ON DELETE {}", action.as_sql());
            }
        }
    }
    sql
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{col, registry, IndexDefinition, OnDelete, TableDefinition};

    #[test]
    fn test_render_users_migration_shape() {
        let users = registry().table("users").unwrap();
        let code = render_migration(users, "2024_01_01", 14);

        assert!(code.contains("pub struct CreateUsersTable;"));
        assert!(code.contains("\"create_users_table\""));
        assert!(code.contains("20240101000014"));
        assert!(code.contains("CREATE TABLE IF NOT EXISTS users ("));
        assert!(code.contains("id BIGSERIAL PRIMARY KEY"));
        assert!(code.contains("email VARCHAR(255) NOT NULL UNIQUE"));
        assert!(code.contains("remember_token VARCHAR(100) NULL"));
        // Reserved names collapse into the combined timestamp block.
        assert!(code.contains("created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP"));
        assert_eq!(code.matches("created_at").count(), 1);
        assert!(code.contains("DROP TABLE IF EXISTS users"));
    }

    #[test]
    fn test_foreign_key_modifier_order() {
        let orders = registry().table("orders").unwrap();
        let code = render_migration(orders, "2024_01_01", 20);
        // NOT NULL before REFERENCES before ON DELETE
        assert!(code.contains("user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE RESTRICT"));

        let vouchers = registry().table("vouchers").unwrap();
        let code = render_migration(vouchers, "2024_01_01", 21);
        assert!(code.contains("shop_id BIGINT NULL REFERENCES shops(id) ON DELETE CASCADE"));
    }

    #[test]
    fn test_enum_column_embeds_value_list() {
        let orders = registry().table("orders").unwrap();
        let code = render_migration(orders, "2024_01_01", 20);
        assert!(code.contains(
            "CHECK (payment_status IN ('pending', 'paid', 'failed', 'refunded'))"
        ));
    }

    #[test]
    fn test_composite_key_suppresses_id() {
        let wishlists = registry().table("wishlists").unwrap();
        let code = render_migration(wishlists, "2024_01_01", 30);
        assert!(!code.contains("BIGSERIAL"));
        assert!(code.contains("PRIMARY KEY (user_id, product_id)"));
        assert_eq!(code.matches("PRIMARY KEY").count(), 1);
    }

    #[test]
    fn test_soft_deletes_block() {
        let shops = registry().table("shops").unwrap();
        let code = render_migration(shops, "2024_01_01", 17);
        assert!(code.contains("deleted_at TIMESTAMP NULL"));
    }

    #[test]
    fn test_index_directives_and_reverse_drop() {
        let table = TableDefinition::new("samples", "Sample rows")
            .columns(vec![col("id", crate::schema::ColumnType::Id)])
            .index(IndexDefinition::on(&["a"]))
            .index(IndexDefinition::unique(&["b"]));
        let code = render_migration(&table, "2024_01_01", 1);
        assert!(code.contains("CREATE INDEX IF NOT EXISTS idx_samples_a ON samples(a)"));
        assert!(code.contains("CREATE UNIQUE INDEX IF NOT EXISTS idx_samples_b ON samples(b)"));
        let drop_b = code.find("DROP INDEX IF EXISTS idx_samples_b").unwrap();
        let drop_a = code.find("DROP INDEX IF EXISTS idx_samples_a").unwrap();
        assert!(drop_b < drop_a, "indexes drop in reverse declaration order");
    }

    #[test]
    fn test_comment_quotes_are_doubled() {
        let table = TableDefinition::new("quirks", "The shop's quirks")
            .columns(vec![col("id", crate::schema::ColumnType::Id)]);
        let code = render_migration(&table, "2024_01_01", 2);
        assert!(code.contains("COMMENT ON TABLE quirks IS 'The shop''s quirks'"));
    }

    #[test]
    fn test_default_comes_before_unique() {
        let table = TableDefinition::new("flags", "").columns(vec![
            col("id", crate::schema::ColumnType::Id),
            col("kind", crate::schema::ColumnType::String)
                .default("'plain'")
                .unique(),
            col("owner_id", crate::schema::ColumnType::ForeignId)
                .references("flags", OnDelete::Cascade),
        ]);
        let code = render_migration(&table, "2024_01_01", 3);
        assert!(code.contains("kind VARCHAR(255) NOT NULL DEFAULT 'plain' UNIQUE"));
        assert!(code.contains("owner_id BIGINT NOT NULL REFERENCES flags(id) ON DELETE CASCADE"));
    }
}
