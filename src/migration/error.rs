//! Migration-specific error types

use crate::db::DbError;
use thiserror::Error;

/// Migration-specific errors
#[derive(Debug, Error)]
pub enum MigrationError {
    /// Database execution error
    #[error("database error: {0}")]
    Database(#[from] DbError),
    /// Migration directory or file not found
    #[error("migration file not found: {0}")]
    FileNotFound(String),
    /// Invalid migration file format
    #[error("invalid migration format: {0}")]
    InvalidFormat(String),
}
