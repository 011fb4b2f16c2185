//! Command-line entry point.
//!
//! Rebuilds the schema from migration files (the default) or from a
//! live SQLite database, then writes one Dart model per table.

use std::path::PathBuf;

use clap::Parser;
use sqlx::sqlite::SqlitePool;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use dartgen::discover::{discover_migrations, reconstruct_schema};
use dartgen::introspect::{introspect_schema, SqliteMetadata};
use dartgen::writer::ModelWriter;

#[derive(Parser)]
#[command(name = "dartgen")]
#[command(about = "Generate Dart model classes from Laravel migrations or a live database")]
#[command(version)]
struct Cli {
    /// Rebuild the schema from migration files (the default)
    #[arg(long, conflicts_with = "from_database")]
    from_migrations: bool,

    /// Read the schema from the live database instead
    #[arg(long)]
    from_database: bool,

    /// Database URL
    #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite:db.sqlite3")]
    database: String,

    /// Directory containing the migration files
    #[arg(short, long, default_value = "database/migrations")]
    migrations_dir: PathBuf,

    /// Directory the generated models are written to
    #[arg(short, long, default_value = "lib/models")]
    output_dir: PathBuf,

    /// Print generated models instead of writing them
    #[arg(long)]
    dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let from_database = cli.from_database && !cli.from_migrations;
    let state = if from_database {
        info!("Introspecting {}", cli.database);
        let pool = SqlitePool::connect(&cli.database).await?;
        introspect_schema(&SqliteMetadata::new(pool)).await
    } else {
        let files = discover_migrations(&cli.migrations_dir)?;
        info!(
            "Replaying {} migration files from {}",
            files.len(),
            cli.migrations_dir.display()
        );
        reconstruct_schema(&files)
    };

    if state.is_empty() {
        info!("No tables found, nothing to generate");
        return Ok(());
    }

    let writer = ModelWriter::new(&cli.output_dir).dry_run(cli.dry_run);
    let written = writer.write_models(&state)?;
    if cli.dry_run {
        info!("Dry run complete ({} models)", written.len());
    } else {
        info!(
            "Generated {} models in {}",
            written.len(),
            cli.output_dir.display()
        );
    }

    Ok(())
}
