//! Cartwright Codegen - schema-driven code generation CLI
//!
//! Four independent commands consume the compiled-in storefront registry
//! and materialize source artifacts: migrations, models, enums (plus model
//! cast synchronization), and seeders (plus the orchestration module).
//! Skips and per-entity warnings are not failures: generator outcomes
//! always exit 0, and only argument-parsing errors exit non-zero.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use cartwright_codegen::schema::{self, SchemaRegistry};
use cartwright_codegen::writer::{enums, migrations, models, seeders};
use cartwright_codegen::GeneratorConfig;

#[derive(Parser)]
#[command(name = "cartwright-codegen")]
#[command(about = "Generate migrations, models, enums, and seeders from the storefront schema")]
#[command(version = "0.1.0")]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate enum files and synchronize model casts
    #[command(name = "db:generate-enums")]
    GenerateEnums {
        /// Overwrite existing enum files
        #[arg(long)]
        force: bool,

        /// Only generate enums bound to these tables
        #[arg(long, value_delimiter = ',')]
        tables: Vec<String>,
    },

    /// Generate one migration file per table
    #[command(name = "db:generate-migrations")]
    GenerateMigrations {
        /// External declarative schema file (accepted, not yet implemented)
        #[arg(long)]
        schema: Option<PathBuf>,

        /// First counter value for new migration files
        #[arg(long)]
        start: Option<u32>,

        /// Base date embedded in migration file names (YYYY_MM_DD)
        #[arg(long)]
        date: Option<String>,
    },

    /// Generate one model file per non-pivot table
    #[command(name = "db:generate-models")]
    GenerateModels {
        /// Only generate models for these tables
        #[arg(long, value_delimiter = ',')]
        tables: Vec<String>,

        /// Overwrite existing model files
        #[arg(long)]
        force: bool,
    },

    /// Generate seeders and the orchestration module
    #[command(name = "db:generate-seeders")]
    GenerateSeeders {
        /// Only generate seeders for these tables
        #[arg(long, value_delimiter = ',')]
        tables: Vec<String>,

        /// Default rows per table baked into each seeder
        #[arg(long)]
        count: Option<usize>,

        /// Overwrite existing seeder files
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.quiet {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();
    } else if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let config = match GeneratorConfig::load() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("configuration failed to load, using defaults: {}", err);
            GeneratorConfig::default()
        }
    };
    let registry = schema::registry();

    let result = match cli.command {
        Commands::GenerateEnums { force, tables } => {
            handle_enums(registry, &config, &tables, force)
        }
        Commands::GenerateMigrations {
            schema,
            start,
            date,
        } => handle_migrations(registry, &config, schema, start, date),
        Commands::GenerateModels { tables, force } => {
            handle_models(registry, &config, &tables, force)
        }
        Commands::GenerateSeeders {
            tables,
            count,
            force,
        } => handle_seeders(registry, &config, &tables, count, force),
    };

    if let Err(err) = result {
        // Generator-domain failures are reported but still exit 0; the
        // only non-zero exits come from clap's own argument handling.
        eprintln!("❌ Error: {:#}", err);
    }
    process::exit(0);
}

fn handle_enums(
    registry: &SchemaRegistry,
    config: &GeneratorConfig,
    tables: &[String],
    force: bool,
) -> anyhow::Result<()> {
    println!("🔧 Generating enums");
    let summary = enums::generate(
        registry,
        PathBuf::from(&config.enums_dir).as_path(),
        PathBuf::from(&config.models_dir).as_path(),
        tables,
        force,
    )?;
    summary.print("enum file");
    Ok(())
}

fn handle_migrations(
    registry: &SchemaRegistry,
    config: &GeneratorConfig,
    schema: Option<PathBuf>,
    start: Option<u32>,
    date: Option<String>,
) -> anyhow::Result<()> {
    if let Some(path) = schema {
        log::warn!(
            "--schema={} is not implemented yet, falling back to the built-in registry",
            path.display()
        );
    }
    println!("🔧 Generating migrations");
    let summary = migrations::generate(
        registry,
        PathBuf::from(&config.migrations_dir).as_path(),
        date.as_deref().unwrap_or(&config.base_date),
        start.unwrap_or(config.counter_start),
    )?;
    summary.print("migration");
    Ok(())
}

fn handle_models(
    registry: &SchemaRegistry,
    config: &GeneratorConfig,
    tables: &[String],
    force: bool,
) -> anyhow::Result<()> {
    println!("🔧 Generating models");
    let summary = models::generate(
        registry,
        PathBuf::from(&config.models_dir).as_path(),
        tables,
        force,
    )?;
    summary.print("model");
    Ok(())
}

fn handle_seeders(
    registry: &SchemaRegistry,
    config: &GeneratorConfig,
    tables: &[String],
    count: Option<usize>,
    force: bool,
) -> anyhow::Result<()> {
    println!("🔧 Generating seeders");
    let summary = seeders::generate(
        registry,
        PathBuf::from(&config.seeders_dir).as_path(),
        tables,
        count.unwrap_or(config.seed_count),
        config.fk_ceiling,
        force,
    )?;
    summary.print("seeder");
    Ok(())
}
