//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Terminal sleep tracker.
///
/// Records nightly sleep and derives statistics, streaks, and pattern
/// insights from the logged history.
#[derive(Debug, Parser)]
#[command(name = "slt", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record a night of sleep.
    Log {
        /// Night the sleep belongs to (YYYY-MM-DD, "today", or "yesterday").
        #[arg(long, default_value = "today")]
        date: String,

        /// Bedtime in 24-hour HH:MM.
        #[arg(long)]
        bedtime: String,

        /// Wake time in 24-hour HH:MM.
        #[arg(long)]
        waketime: String,

        /// Sleep quality from 1 to 10.
        #[arg(long)]
        quality: i64,

        /// Morning mood (energized, refreshed, neutral, tired, exhausted).
        #[arg(long, default_value = "neutral")]
        mood: String,

        /// Comma-separated factors for the night (e.g. caffeine,exercise).
        #[arg(long, value_delimiter = ',')]
        factors: Vec<String>,

        /// Free-form note.
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// List recorded nights, newest first.
    List {
        /// Maximum number of nights to show (defaults to the configured
        /// `list_limit`).
        #[arg(long)]
        limit: Option<u32>,

        /// Output JSON instead of formatted text.
        #[arg(long)]
        json: bool,
    },

    /// Show summary statistics for the recorded history.
    Stats {
        /// Output JSON instead of formatted text.
        #[arg(long)]
        json: bool,
    },

    /// Show sleep pattern insights.
    Insights {
        /// Output JSON instead of formatted text.
        #[arg(long)]
        json: bool,
    },

    /// Fill the database with generated sample nights.
    Seed {
        /// Number of nights to generate, ending today.
        #[arg(long, default_value_t = 7)]
        days: u32,
    },

    /// Write all logs as JSON Lines to stdout.
    Export,

    /// Read JSON Lines logs from stdin.
    Import,

    /// Delete every recorded night.
    Clear {
        /// Confirm the deletion. Without it the command only reports the count.
        #[arg(long)]
        force: bool,
    },
}
