//! Migration file discovery and parsing

use crate::migration::MigrationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Pattern: m{YYYY_MM_DD}_{6-digit counter}_{name}.rs
static FILENAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^m(\d{4}_\d{2}_\d{2})_(\d{6})_(.+)\.rs$").expect("valid regex"));

/// Represents a discovered migration file
#[derive(Debug, Clone)]
pub struct MigrationFile {
    /// Path to the migration file
    pub path: PathBuf,

    /// Migration version (base date digits + counter: YYYYMMDDNNNNNN)
    pub version: i64,

    /// Zero-padded counter portion of the file name
    pub counter: u32,

    /// Human-readable migration name
    pub name: String,
}

impl MigrationFile {
    /// Parse a migration file name into (version, counter, name).
    ///
    /// Expected format: `m{YYYY_MM_DD}_{NNNNNN}_{name}.rs`
    ///
    /// # Example
    /// - `m2024_01_01_000014_create_users_table.rs` →
    ///   version: 20240101000014, counter: 14, name: "create_users_table"
    pub fn parse_filename(filename: &str) -> Result<(i64, u32, String), MigrationError> {
        let caps = FILENAME_RE.captures(filename).ok_or_else(|| {
            MigrationError::InvalidFormat(format!(
                "Migration file name '{}' does not match expected pattern: m{{YYYY_MM_DD}}_{{NNNNNN}}_{{name}}.rs",
                filename
            ))
        })?;

        let date_digits = caps.get(1).map(|m| m.as_str().replace('_', "")).unwrap_or_default();
        let counter_str = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        let name = caps.get(3).map(|m| m.as_str().to_string()).unwrap_or_default();

        let version = format!("{}{}", date_digits, counter_str)
            .parse::<i64>()
            .map_err(|_| MigrationError::InvalidFormat(format!("non-numeric version in '{}'", filename)))?;
        let counter = counter_str
            .parse::<u32>()
            .map_err(|_| MigrationError::InvalidFormat(format!("non-numeric counter in '{}'", filename)))?;

        Ok((version, counter, name))
    }
}

/// Discover all migration files in a directory
///
/// Scans for files matching `m{YYYY_MM_DD}_{NNNNNN}_{name}.rs` and returns
/// them sorted by version (oldest first). Files that do not match the
/// pattern (a `mod.rs`, editor droppings) are skipped, not errors.
///
/// # Errors
///
/// Returns `MigrationError::FileNotFound` if the directory cannot be read.
pub fn discover_migrations(migrations_dir: &Path) -> Result<Vec<MigrationFile>, MigrationError> {
    if !migrations_dir.is_dir() {
        return Err(MigrationError::FileNotFound(
            migrations_dir.to_string_lossy().to_string(),
        ));
    }

    let entries = fs::read_dir(migrations_dir).map_err(|e| {
        MigrationError::FileNotFound(format!(
            "Failed to read migrations directory {}: {}",
            migrations_dir.display(),
            e
        ))
    })?;

    let mut migrations = Vec::new();
    for entry in entries {
        let entry = entry
            .map_err(|e| MigrationError::FileNotFound(format!("Failed to read directory entry: {}", e)))?;
        let path = entry.path();

        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }

        let filename = match path.file_name().and_then(|n| n.to_str()) {
            Some(f) => f,
            None => continue,
        };

        match MigrationFile::parse_filename(filename) {
            Ok((version, counter, name)) => migrations.push(MigrationFile {
                path,
                version,
                counter,
                name,
            }),
            Err(_) => {
                log::debug!("skipping non-migration file: {}", filename);
            }
        }
    }

    // Sort by version (ascending - oldest first)
    migrations.sort_by_key(|m| m.version);

    Ok(migrations)
}

/// Highest counter value among the migration files in a directory.
///
/// Returns `Ok(None)` when the directory does not exist or holds no
/// migration files; generators use this to resume their shared counter.
pub fn highest_counter(migrations_dir: &Path) -> Result<Option<u32>, MigrationError> {
    if !migrations_dir.is_dir() {
        return Ok(None);
    }
    let migrations = discover_migrations(migrations_dir)?;
    Ok(migrations.iter().map(|m| m.counter).max())
}
