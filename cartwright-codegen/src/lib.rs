//! Cartwright Codegen Library
//!
//! Schema-driven code generation for the Cartwright storefront. The schema
//! registry in [`schema`] is the single source of truth; the writers in
//! [`writer`] materialize migrations, models, enums, and seeders from it.

pub mod config;
pub mod error;
pub mod inflect;
pub mod schema;
pub mod typemap;
pub mod writer;

pub use config::GeneratorConfig;
pub use error::GenError;
pub use schema::SchemaRegistry;
