//! Generator configuration
//!
//! Loaded from an optional `cartwright.toml` merged with `CARTWRIGHT__`
//! prefixed environment variables (e.g. `CARTWRIGHT__MODELS_DIR`). Every
//! field has a default, so running with no configuration at all works.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// Output directory for migration files
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: String,
    /// Output directory for model files
    #[serde(default = "default_models_dir")]
    pub models_dir: String,
    /// Output directory for enum files
    #[serde(default = "default_enums_dir")]
    pub enums_dir: String,
    /// Output directory for seeder files
    #[serde(default = "default_seeders_dir")]
    pub seeders_dir: String,
    /// Rows per table when `--count` is not given
    #[serde(default = "default_seed_count")]
    pub seed_count: usize,
    /// First migration counter value when `--start` is not given
    #[serde(default = "default_counter_start")]
    pub counter_start: u32,
    /// Migration base date when `--date` is not given
    #[serde(default = "default_base_date")]
    pub base_date: String,
    /// Upper bound for synthesized foreign key references
    #[serde(default = "default_fk_ceiling")]
    pub fk_ceiling: i64,
}

fn default_migrations_dir() -> String {
    "migrations".to_string()
}

fn default_models_dir() -> String {
    "app/src/models".to_string()
}

fn default_enums_dir() -> String {
    "app/src/enums".to_string()
}

fn default_seeders_dir() -> String {
    "app/src/seeders".to_string()
}

fn default_seed_count() -> usize {
    10
}

fn default_counter_start() -> u32 {
    14
}

fn default_base_date() -> String {
    "2024_01_01".to_string()
}

fn default_fk_ceiling() -> i64 {
    10
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            migrations_dir: default_migrations_dir(),
            models_dir: default_models_dir(),
            enums_dir: default_enums_dir(),
            seeders_dir: default_seeders_dir(),
            seed_count: default_seed_count(),
            counter_start: default_counter_start(),
            base_date: default_base_date(),
            fk_ceiling: default_fk_ceiling(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from `cartwright.toml` (optional) and environment.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name("cartwright.toml").required(false))
            .add_source(Environment::with_prefix("CARTWRIGHT").separator("__"));

        let settings = match builder.build() {
            Ok(cfg) => cfg,
            Err(err) => {
                // File present but unreadable: warn and retry with env only.
                if std::path::Path::new("cartwright.toml").exists() {
                    eprintln!(
                        "Warning: failed to load cartwright.toml, falling back to env. Error: {}",
                        err
                    );
                }
                Config::builder()
                    .add_source(Environment::with_prefix("CARTWRIGHT").separator("__"))
                    .build()?
            }
        };

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = GeneratorConfig::default();
        assert_eq!(cfg.migrations_dir, "migrations");
        assert_eq!(cfg.models_dir, "app/src/models");
        assert_eq!(cfg.seed_count, 10);
        assert_eq!(cfg.counter_start, 14);
        assert_eq!(cfg.base_date, "2024_01_01");
        assert_eq!(cfg.fk_ceiling, 10);
    }
}
