//! Migration trait definition

use super::schema_manager::SchemaManager;
use crate::db::DbError;

/// Trait that all migrations must implement
///
/// Each migration file defines a struct that implements this trait
/// with `up()` and `down()` methods for applying and rolling back the change.
pub trait Migration: Send + Sync {
    /// Get the migration name (human-readable identifier)
    fn name(&self) -> &str;

    /// Get the migration version (base date + counter: YYYYMMDDNNNNNN)
    fn version(&self) -> i64;

    /// Apply the migration (forward migration)
    ///
    /// This method contains the logic to apply the migration, such as
    /// creating tables, adding columns, creating indexes, etc.
    fn up(&self, manager: &mut SchemaManager<'_>) -> Result<(), DbError>;

    /// Rollback the migration (reverse migration)
    ///
    /// This method contains the logic to undo the migration, normally
    /// dropping whatever `up()` created.
    fn down(&self, manager: &mut SchemaManager<'_>) -> Result<(), DbError>;
}
