use anyhow::Context;
use clap::Parser;
use scoreboard::cli::Cli;
use scoreboard::config::Config;
use scoreboard::logging::init_tracing;
use scoreboard::{replay, ui};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(path) = init_tracing() {
        info!(log_file = %path, "logging enabled");
    }

    if let Some(script) = &cli.replay {
        let state = replay::run_file(script)?;
        println!("{}", serde_json::to_string_pretty(&state)?);
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    ui::runtime::run(&config).context("terminal UI failed")?;
    Ok(())
}
