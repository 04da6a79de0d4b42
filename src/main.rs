mod models;
mod handlers;
mod services;
mod config;
mod errors;
mod state;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use crate::{
    config::Config,
    handlers::StdConsole,
    services::FileStore,
    state::AppState,
};

fn main() -> Result<()> {
    // Load configuration
    let config = Config::load().context("Failed to load configuration")?;

    // Logs go to stderr so they never mix with the menus on stdout
    let level: LevelFilter = config
        .logging
        .level
        .parse()
        .with_context(|| format!("Invalid log level: {}", config.logging.level))?;
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();

    let store = FileStore::from_config(&config.storage);
    let mut state = AppState::load(&store);

    let mut console = StdConsole::stdio();
    let saved = handlers::run_session(&mut state, &store, &mut console)
        .context("Console session failed")?;
    if !saved {
        tracing::warn!("Exiting with unsaved changes");
    }

    Ok(())
}
