use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use slt_cli::commands::{clear, export, import, insights, list, log, seed, stats};
use slt_cli::{Cli, Commands, Config};

/// Load config and open database, ensuring the parent directory exists.
fn open_database(config_path: Option<&Path>) -> Result<(slt_db::Database, Config)> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");

    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).context("failed to create database directory")?;
    }

    let db = slt_db::Database::open(&config.database_path).context("failed to open database")?;
    Ok((db, config))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    match &cli.command {
        Some(Commands::Log {
            date,
            bedtime,
            waketime,
            quality,
            mood,
            factors,
            notes,
        }) => {
            let (db, _config) = open_database(cli.config.as_deref())?;
            let entry = log::Entry {
                date,
                bedtime,
                waketime,
                quality: *quality,
                mood,
                factors,
                notes,
            };
            log::run(&db, &entry)?;
        }
        Some(Commands::List { limit, json }) => {
            let (db, config) = open_database(cli.config.as_deref())?;
            list::run(&db, limit.unwrap_or(config.list_limit), *json)?;
        }
        Some(Commands::Stats { json }) => {
            let (db, _config) = open_database(cli.config.as_deref())?;
            stats::run(&db, *json)?;
        }
        Some(Commands::Insights { json }) => {
            let (db, _config) = open_database(cli.config.as_deref())?;
            insights::run(&db, *json)?;
        }
        Some(Commands::Seed { days }) => {
            let (mut db, _config) = open_database(cli.config.as_deref())?;
            seed::run(&mut db, *days)?;
        }
        Some(Commands::Export) => {
            let (db, _config) = open_database(cli.config.as_deref())?;
            export::run(&db)?;
        }
        Some(Commands::Import) => {
            let (mut db, _config) = open_database(cli.config.as_deref())?;
            import::run(&mut db)?;
        }
        Some(Commands::Clear { force }) => {
            let (db, _config) = open_database(cli.config.as_deref())?;
            clear::run(&db, *force)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
