//! rInternLog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod report;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::{Config, RemoteConfig};
use errors::AppResult;
use store::{Store, SupabaseClient};
use tracing::debug;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        cmd => {
            // credenziali risolte UNA sola volta, prima di toccare lo store
            let remote_cfg = RemoteConfig::resolve(&Config::secrets_file())?;
            debug!(remote = ?remote_cfg, "remote store configured");

            let client = SupabaseClient::new(&remote_cfg);
            let store = Store::new(cfg, &client);
            store.ensure_mirrors()?;

            dispatch_records(cmd, cfg, &store)
        }
    }
}

fn dispatch_records(cmd: &Commands, cfg: &Config, store: &Store<'_>) -> AppResult<()> {
    match cmd {
        Commands::Attend { .. } => cli::commands::attend::handle(cmd, store),
        Commands::Diary { .. } => cli::commands::diary::handle(cmd, store),
        Commands::List { .. } => cli::commands::list::handle(cmd, store),
        Commands::Report { .. } => cli::commands::report::handle(cmd, cfg, store),
        Commands::Stats { .. } => cli::commands::stats::handle(cmd, store),
        Commands::Init | Commands::Config { .. } => Ok(()),
    }
}

/// Entry point usato da main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config UNA sola volta
    let mut cfg = Config::load()?;

    // 3️⃣ applica eventuale override della data dir da riga di comando
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = dir.clone();
    }
    cfg.validate()?;

    config::logging::init(&cfg.log_level);
    debug!(data_dir = %cfg.data_path().display(), "configuration loaded");

    // 4️⃣ passa tutto al dispatcher
    dispatch(&cli, &cfg)
}
