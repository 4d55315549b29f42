use clap::Parser;
use std::path::PathBuf;

/// Terminal scoreboard: track matches and their running totals.
#[derive(Debug, Parser)]
#[command(name = "scoreboard", version)]
pub struct Cli {
    /// Path to the config file (default: <config dir>/scoreboard/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Apply a JSON-lines action script, print the final state as JSON and exit
    #[arg(long, value_name = "FILE")]
    pub replay: Option<PathBuf>,
}
