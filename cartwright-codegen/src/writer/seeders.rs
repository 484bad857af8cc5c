//! Seeder generation and orchestration
//!
//! One seeder per table: a bounded counted loop building synthetic rows and
//! inserting them one at a time through `SqlExecutor`, counting failures
//! instead of aborting. A full (non-filtered) run also regenerates the
//! `mod.rs` orchestration module wholesale, sequencing every seeder in
//! topologically sorted foreign-key order; a cross-table cycle aborts
//! generation before any file is written.

use crate::error::GenError;
use crate::inflect;
use crate::schema::{SchemaRegistry, TableDefinition};
use crate::typemap;
use crate::writer::{filter_tables, GenSummary, Materializer};
use std::fmt::Write as _;
use std::path::Path;

pub fn generate(
    registry: &SchemaRegistry,
    dir: &Path,
    tables: &[String],
    count: usize,
    fk_ceiling: i64,
    force: bool,
) -> Result<GenSummary, GenError> {
    // Cycles are a configuration defect surfaced before anything lands on
    // disk, not at insert time.
    let order = registry.seeding_order()?;

    let mut materializer = Materializer::new(force);
    for table in filter_tables(registry, tables) {
        let path = dir.join(format!("{}_seeder.rs", table.name));
        materializer.write_new(&path, &render_seeder(table, count, fk_ceiling), false)?;
    }

    // The orchestration module is regenerated wholesale on full runs only;
    // a filtered run would otherwise drop modules from it.
    if tables.is_empty() {
        materializer.write_always(&dir.join("mod.rs"), &render_orchestration(registry, &order))?;
    }
    Ok(materializer.summary)
}

/// Render one seeder file.
pub fn render_seeder(table: &TableDefinition, count: usize, fk_ceiling: i64) -> String {
    let struct_name = format!("{}Seeder", inflect::studly(table.name));

    let mut out = String::new();
    out.push_str("//! Generated by cartwright-codegen - do not edit manually.\n//!\n");
    let _ = writeln!(out, "//! Seeder for the `{}` table.\n", table.name);
    out.push_str("use cartwright::db::{SqlExecutor, SqlValue};\n");
    out.push_str("use cartwright::seeder::{insert_sql, SeedReport, Seeder};\n");
    out.push_str("use cartwright::synth;\n\n");
    let _ = writeln!(out, "pub struct {};\n", struct_name);
    let _ = writeln!(out, "impl {} {{", struct_name);
    out.push_str("    /// Row count used when the caller does not supply one.\n");
    let _ = writeln!(out, "    pub const DEFAULT_COUNT: usize = {};", count);
    out.push_str("}\n\n");
    let _ = writeln!(out, "impl Seeder for {} {{", struct_name);
    out.push_str("    fn table(&self) -> &'static str {\n");
    let _ = writeln!(out, "        \"{}\"", table.name);
    out.push_str("    }\n\n");
    out.push_str("    fn run(&self, executor: &mut dyn SqlExecutor, count: usize) -> SeedReport {\n");
    let _ = writeln!(out, "        let mut report = SeedReport::new(\"{}\", count);", table.name);
    out.push_str("        for _ in 0..count {\n");
    out.push_str("            let row: Vec<(&str, SqlValue)> = vec![\n");
    for column in table.seedable_columns() {
        let _ = writeln!(
            out,
            "                (\"{}\", SqlValue::from({})),",
            column.name,
            typemap::seed_expr(column, fk_ceiling)
        );
    }
    out.push_str("            ];\n");
    let _ = writeln!(out, "            let sql = insert_sql(\"{}\", &row);", table.name);
    out.push_str("            match executor.execute(&sql) {\n");
    out.push_str("                Ok(_) => report.inserted += 1,\n");
    out.push_str("                Err(err) => report.record_failure(&err),\n");
    out.push_str("            }\n");
    out.push_str("        }\n");
    out.push_str("        report\n    }\n}\n");
    out
}

/// Render the orchestration module sequencing all seeders.
fn render_orchestration(registry: &SchemaRegistry, order: &[&'static str]) -> String {
    let mut out = String::new();
    out.push_str("//! Generated by cartwright-codegen - do not edit manually.\n//!\n");
    out.push_str("//! Seeders run in foreign-key dependency order: parents before\n");
    out.push_str("//! children, so synthesized references have rows to land on.\n\n");
    for table in registry.tables() {
        let _ = writeln!(out, "pub mod {}_seeder;", table.name);
    }
    out.push('\n');
    out.push_str("use cartwright::db::SqlExecutor;\n");
    out.push_str("use cartwright::seeder::{print_summary, SeedReport, Seeder};\n\n");
    out.push_str("/// Run every seeder, returning one report per table.\n");
    out.push_str("pub fn run_all(executor: &mut dyn SqlExecutor, count: usize) -> Vec<SeedReport> {\n");
    out.push_str("    let seeders: Vec<Box<dyn Seeder>> = vec![\n");
    for table in order {
        let _ = writeln!(
            out,
            "        Box::new({}_seeder::{}Seeder),",
            table,
            inflect::studly(table)
        );
    }
    out.push_str("    ];\n");
    out.push_str("    let mut reports = Vec::with_capacity(seeders.len());\n");
    out.push_str("    for seeder in &seeders {\n");
    out.push_str("        println!(\"🌱 Seeding {}\", seeder.table());\n");
    out.push_str("        reports.push(seeder.run(executor, count));\n");
    out.push_str("    }\n");
    out.push_str("    print_summary(&reports);\n");
    out.push_str("    reports\n}\n");
    out
}
