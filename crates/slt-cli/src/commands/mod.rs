//! CLI subcommand implementations.

pub mod clear;
pub mod export;
pub mod import;
pub mod insights;
pub mod list;
pub mod log;
pub mod seed;
pub mod stats;
pub mod util;
