//! SchemaManager - executes schema operations for migrations

use crate::db::{DbError, SqlExecutor};

/// SchemaManager wraps a `SqlExecutor` for use inside migrations.
///
/// Generated migrations receive a manager in `up()`/`down()` and run their
/// DDL through it, keeping the artifacts independent of any concrete driver.
pub struct SchemaManager<'a> {
    executor: &'a mut dyn SqlExecutor,
}

impl<'a> SchemaManager<'a> {
    /// Create a new SchemaManager with the given executor
    pub fn new(executor: &'a mut dyn SqlExecutor) -> Self {
        Self { executor }
    }

    /// Execute a raw SQL statement
    ///
    /// # Errors
    ///
    /// Returns `DbError` if the statement fails.
    pub fn execute(&mut self, sql: &str) -> Result<u64, DbError> {
        self.executor.execute(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recorder {
        statements: Vec<String>,
    }

    impl SqlExecutor for Recorder {
        fn execute(&mut self, sql: &str) -> Result<u64, DbError> {
            self.statements.push(sql.to_string());
            Ok(0)
        }
    }

    #[test]
    fn test_execute_forwards_to_executor() {
        let mut recorder = Recorder { statements: Vec::new() };
        let mut manager = SchemaManager::new(&mut recorder);
        manager.execute("CREATE TABLE t (id BIGSERIAL PRIMARY KEY)").unwrap();
        assert_eq!(recorder.statements.len(), 1);
        assert!(recorder.statements[0].starts_with("CREATE TABLE"));
    }
}
