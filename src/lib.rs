//! rAvailability library root.
//! Exposes the aggregation engine, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands::AppContext;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use tracing::debug;
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(&cli.command, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Team { .. } => cli::commands::team::handle(&cli.command, ctx),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::Timeline { .. } => cli::commands::timeline::handle(&cli.command, ctx),
        Commands::Periods { .. } => cli::commands::periods::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ logging
    cli::init_tracing(cli.verbose, cli.quiet)?;

    // 3️⃣ load config once, honouring --config
    let config_path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load(Some(config_path.as_path()))?;

    // 4️⃣ pin "today" so preset windows are reproducible
    let today = match &cli.today {
        Some(s) => utils::date::normalize_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => utils::date::today(),
    };
    debug!(%today, config = %config_path.display(), "context ready");

    let ctx = AppContext {
        cfg,
        config_path,
        today,
    };

    dispatch(&cli, &ctx)
}
