//! Seeder runtime: trait, per-table reports, and INSERT rendering
//!
//! Generated seeders run a bounded loop of single-row inserts. Failures are
//! per-record events: the loop keeps going and the report carries the counts,
//! so an under-seeded table is visible in the run summary instead of silent.

use crate::db::{DbError, SqlExecutor, SqlValue};
use colored::Colorize;

/// Trait implemented by every generated seeder.
pub trait Seeder {
    /// Target table name
    fn table(&self) -> &'static str;

    /// Insert up to `count` synthetic rows, returning the outcome counts.
    ///
    /// Per-record failures are recorded on the report and never abort the
    /// loop; the number of rows actually inserted is a soft upper bound.
    fn run(&self, executor: &mut dyn SqlExecutor, count: usize) -> SeedReport;
}

/// Outcome of one seeder run against one table.
///
/// Serializes for callers that want the run outcome as JSON rather than
/// the printed summary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SeedReport {
    pub table: &'static str,
    pub requested: usize,
    pub inserted: usize,
    pub failed: usize,
}

impl SeedReport {
    pub fn new(table: &'static str, requested: usize) -> Self {
        Self {
            table,
            requested,
            inserted: 0,
            failed: 0,
        }
    }

    /// Record one failed insert. The error is logged at debug level only;
    /// the summary line is the user-facing signal.
    pub fn record_failure(&mut self, err: &DbError) {
        self.failed += 1;
        log::debug!("insert into {} failed: {}", self.table, err);
    }

    /// True when every requested row was inserted.
    pub fn is_complete(&self) -> bool {
        self.inserted == self.requested
    }
}

/// Render a single-row INSERT statement with inline literals.
///
/// Values are rendered via [`SqlValue::render`], which doubles embedded
/// single quotes in text.
pub fn insert_sql(table: &str, row: &[(&str, SqlValue)]) -> String {
    let columns = row.iter().map(|(name, _)| *name).collect::<Vec<_>>().join(", ");
    let values = row
        .iter()
        .map(|(_, value)| value.render())
        .collect::<Vec<_>>()
        .join(", ");
    format!("INSERT INTO {} ({}) VALUES ({})", table, columns, values)
}

/// Print a per-table summary of a seed run.
///
/// Fully seeded tables print green, partially seeded yellow, and tables
/// where nothing landed print red.
pub fn print_summary(reports: &[SeedReport]) {
    println!("\n📊 Seed Summary\n");
    for report in reports {
        let line = format!(
            "  {:<24} {:>4} inserted, {:>4} failed (of {})",
            report.table, report.inserted, report.failed, report.requested
        );
        if report.is_complete() {
            println!("{}", line.green());
        } else if report.inserted > 0 {
            println!("{}", line.yellow());
        } else {
            println!("{}", line.red());
        }
    }
    let inserted: usize = reports.iter().map(|r| r.inserted).sum();
    let failed: usize = reports.iter().map(|r| r.failed).sum();
    println!("\n📈 Total: {} inserted, {} failed", inserted, failed);
}
