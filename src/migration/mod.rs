//! Migration system for Cartwright
//!
//! This module provides the infrastructure generated migrations run on:
//! - Migration trait definition
//! - SchemaManager for executing schema DDL
//! - Migration file discovery and name parsing
//!
//! # Example
//!
//! ```rust,no_run
//! use cartwright::db::DbError;
//! use cartwright::migration::{Migration, SchemaManager};
//!
//! pub struct CreateUsersTable;
//!
//! impl Migration for CreateUsersTable {
//!     fn name(&self) -> &str {
//!         "create_users_table"
//!     }
//!
//!     fn version(&self) -> i64 {
//!         20240101000014
//!     }
//!
//!     fn up(&self, manager: &mut SchemaManager<'_>) -> Result<(), DbError> {
//!         manager.execute("CREATE TABLE IF NOT EXISTS users (id BIGSERIAL PRIMARY KEY)")?;
//!         Ok(())
//!     }
//!
//!     fn down(&self, manager: &mut SchemaManager<'_>) -> Result<(), DbError> {
//!         manager.execute("DROP TABLE IF EXISTS users")?;
//!         Ok(())
//!     }
//! }
//! ```

pub mod error;
pub mod file;
pub mod migration;
pub mod schema_manager;

pub use error::MigrationError;
pub use file::{discover_migrations, highest_counter, MigrationFile};
pub use migration::Migration;
pub use schema_manager::SchemaManager;
