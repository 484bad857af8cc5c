//! # Cartwright
//!
//! Runtime support for Cartwright's schema-driven code generation.
//!
//! Generated migrations, models, enums, and seeders compile against this
//! crate: migrations run DDL through [`migration::SchemaManager`], models
//! carry their metadata via the [`model::Model`] trait, and seeders insert
//! synthetic rows built with [`synth`] through a [`db::SqlExecutor`].

pub mod db;
pub mod migration;
pub mod model;
pub mod seeder;
pub mod synth;

pub use db::{DbError, SqlExecutor, SqlValue};
pub use model::{Cast, Condition, Model, Notifiable, Relation, RelationKind, SoftDeletes};
pub use seeder::{SeedReport, Seeder};
