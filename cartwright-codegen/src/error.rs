//! Generator error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while materializing generated artifacts.
///
/// Per-entity conditions (existing file without `--force`, unknown table in a
/// `--tables` filter) are warnings, not errors; only filesystem failures and
/// schema configuration defects surface here.
#[derive(Debug, Error)]
pub enum GenError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("circular dependency between tables: {0}")]
    Cycle(String),

    #[error("migration directory scan failed: {0}")]
    Scan(#[from] cartwright::migration::MigrationError),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl GenError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            path: path.into(),
            source,
        }
    }
}
