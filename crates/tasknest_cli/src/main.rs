use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;

use tasknest_core::db::open_db;
use tasknest_core::{init_logging, MemoryStore, SqliteStore};

mod app;
mod cli;
mod config;
mod shell;

use app::App;
use cli::{Cli, Command};
use config::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli);

    if let Some(logging) = &settings.logging {
        init_logging(logging).context("Failed to setup logging")?;
    }
    info!("event=cli_start module=cli status=ok");

    let conn = open_db(&settings.db_path)
        .with_context(|| format!("Failed to open store at {}", settings.db_path.display()))?;
    let persistent = SqliteStore::new(&conn);

    match cli.command {
        Command::Shell => shell::run_shell(&persistent),
        command => {
            // One-shot runs get a fresh transient slot, so only remembered
            // logins carry over between invocations.
            let transient = MemoryStore::new();
            let output = App::new(&persistent, &transient).execute(command)?;
            println!("{} {output}", "✓".green());
            Ok(())
        }
    }
}
