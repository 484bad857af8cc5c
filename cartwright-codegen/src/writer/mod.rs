//! Artifact materialization
//!
//! All four generators funnel their output through [`Materializer`], which
//! owns the skip-if-exists-unless-forced policy, the write-if-changed path
//! used by enum/model synchronization, and the per-run counters behind the
//! `✨ Done` summary line. Two concurrent runs racing check-then-write are
//! unguarded; the tool is a one-developer batch command.

pub mod enums;
pub mod migrations;
pub mod models;
pub mod seeders;

use crate::error::GenError;
use std::fs;
use std::path::Path;

/// What happened to one target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    SkippedExists,
    /// Write-if-changed target already matched byte for byte
    Unchanged,
}

/// Per-run outcome counters, printed as the command summary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenSummary {
    pub written: usize,
    pub skipped: usize,
}

impl GenSummary {
    pub fn print(&self, what: &str) {
        println!(
            "✨ Done: {} {}{} generated, {} skipped",
            self.written,
            what,
            if self.written == 1 { "" } else { "s" },
            self.skipped
        );
    }
}

pub struct Materializer {
    force: bool,
    pub summary: GenSummary,
}

impl Materializer {
    pub fn new(force: bool) -> Self {
        Self {
            force,
            summary: GenSummary::default(),
        }
    }

    /// Write `contents` unless the target exists and force is off.
    ///
    /// The skip is warned (`⚠️`); pass `quiet_skip` for the migration
    /// generator, which skips silently and has no force override.
    pub fn write_new(
        &mut self,
        path: &Path,
        contents: &str,
        quiet_skip: bool,
    ) -> Result<WriteOutcome, GenError> {
        if path.exists() && !self.force {
            self.summary.skipped += 1;
            if !quiet_skip {
                println!("⚠️  Skipped (exists): {}", path.display());
            }
            return Ok(WriteOutcome::SkippedExists);
        }
        self.write(path, contents)?;
        self.summary.written += 1;
        println!("✅ Generated: {}", path.display());
        Ok(WriteOutcome::Written)
    }

    /// Write `contents` only when the file is absent or its bytes differ.
    ///
    /// This is the model-synchronization path: re-running against an
    /// up-to-date model leaves it untouched, which keeps repeated enum
    /// generation byte-stable.
    pub fn write_if_changed(&mut self, path: &Path, contents: &str) -> Result<WriteOutcome, GenError> {
        if let Ok(existing) = fs::read_to_string(path) {
            if existing == contents {
                return Ok(WriteOutcome::Unchanged);
            }
        }
        self.write(path, contents)?;
        self.summary.written += 1;
        println!("✅ Synchronized: {}", path.display());
        Ok(WriteOutcome::Written)
    }

    /// Unconditional write, used for the regenerated seeder orchestration
    /// module.
    pub fn write_always(&mut self, path: &Path, contents: &str) -> Result<(), GenError> {
        self.write(path, contents)?;
        self.summary.written += 1;
        println!("✅ Generated: {}", path.display());
        Ok(())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), GenError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| GenError::io(parent, e))?;
        }
        fs::write(path, contents).map_err(|e| GenError::io(path, e))
    }
}

/// Resolve a `--tables` filter against the registry's declaration order.
///
/// Unknown names warn and drop out; an empty filter means every table.
pub fn filter_tables<'a>(
    registry: &'a crate::schema::SchemaRegistry,
    filter: &[String],
) -> Vec<&'a crate::schema::TableDefinition> {
    if filter.is_empty() {
        return registry.tables().iter().collect();
    }
    let mut selected = Vec::new();
    for name in filter {
        match registry.table(name) {
            Some(table) => selected.push(table),
            None => log::warn!("table '{}' is not in the schema registry, skipping", name),
        }
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    #[test]
    fn test_write_new_skips_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.rs");

        let mut m = Materializer::new(false);
        assert_eq!(m.write_new(&path, "one", false).unwrap(), WriteOutcome::Written);
        assert_eq!(
            m.write_new(&path, "two", false).unwrap(),
            WriteOutcome::SkippedExists
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "one");
        assert_eq!(m.summary.written, 1);
        assert_eq!(m.summary.skipped, 1);
    }

    #[test]
    fn test_write_new_force_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.rs");

        let mut m = Materializer::new(true);
        m.write_new(&path, "one", false).unwrap();
        assert_eq!(m.write_new(&path, "two", false).unwrap(), WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "two");
    }

    #[test]
    fn test_write_if_changed_is_byte_stable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.rs");

        let mut m = Materializer::new(false);
        assert_eq!(m.write_if_changed(&path, "body").unwrap(), WriteOutcome::Written);
        assert_eq!(m.write_if_changed(&path, "body").unwrap(), WriteOutcome::Unchanged);
        assert_eq!(m.write_if_changed(&path, "body2").unwrap(), WriteOutcome::Written);
        assert_eq!(m.summary.written, 2);
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/a.rs");
        let mut m = Materializer::new(false);
        m.write_new(&path, "x", false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_filter_tables_drops_unknown_names() {
        let reg = schema::registry();
        let all = filter_tables(reg, &[]);
        assert_eq!(all.len(), reg.tables().len());

        let some = filter_tables(reg, &["orders".to_string(), "nope".to_string()]);
        assert_eq!(some.len(), 1);
        assert_eq!(some[0].name, "orders");
    }
}
