//! stitchbook library root.
//! Exposes the CLI parser, the high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod forms;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use store::{FileMedium, PersistenceStore, StorageMedium};
use ui::messages::warning;

/// Everything a command handler needs: the configuration loaded once at
/// startup and the single shared store instance. Export, stats, backup and
/// search all read through the same store; `store.reload()` is the explicit
/// way to pick up writes from another process.
pub struct AppContext {
    pub cfg: Config,
    pub store: PersistenceStore<FileMedium>,
}

impl AppContext {
    pub fn new(cfg: Config) -> Self {
        let medium = FileMedium::open(&cfg.store_file);
        if !medium.is_available() {
            warning("Storage medium unavailable; changes may not persist");
        }
        Self {
            store: PersistenceStore::open(medium),
            cfg,
        }
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &mut AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command),
        Commands::Measure { .. } => cli::commands::measure::handle(&cli.command, ctx),
        Commands::Book { .. } => cli::commands::book::handle(&cli.command, ctx),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::Search { .. } => cli::commands::search::handle(&cli.command, ctx),
        Commands::Stats => cli::commands::stats::handle(ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, ctx),
        Commands::Cleanup => cli::commands::cleanup::handle(ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the configuration once.
    let mut cfg = Config::load();

    // Apply a store override from the command line, if any.
    if let Some(custom_store) = &cli.store {
        cfg.store_file = custom_store.clone();
    }

    let mut ctx = AppContext::new(cfg);
    dispatch(&cli, &mut ctx)
}
