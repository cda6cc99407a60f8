//! Terminal front-end for the shopping list.
//!
//! # Responsibility
//! - Drive the core `ListScreen` against a SQLite file from the shell.
//! - Keep output deterministic for quick local sanity checks.

use clap::{Parser, Subcommand};
use log::info;
use shoplist_core::db::open_db;
use shoplist_core::{
    core_version, default_log_level, init_logging, ItemId, ListScreen, ListState, SqliteItemStore,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "shoplist", version, about = "Shopping list backed by SQLite")]
struct Cli {
    /// SQLite database file.
    #[arg(long, env = "SHOPLIST_DB_PATH", default_value = "shoplist.sqlite3")]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, env = "SHOPLIST_LOG_DIR")]
    log_dir: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Print every item in insertion order.
    List,
    /// Add an item.
    Add { title: String },
    /// Delete the item shown at POSITION by `list`.
    Delete { position: usize },
    /// Delete an item by its stable id.
    Remove { id: ItemId },
    /// Print core linkage info.
    Ping,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let command = cli.command.clone().unwrap_or(Command::List);
    if let Command::Ping = command {
        println!("shoplist_core ping={}", shoplist_core::ping());
        println!("shoplist_core version={}", core_version());
        return Ok(());
    }

    let conn = open_db(&cli.db)
        .map_err(|err| format!("cannot open {}: {err}", cli.db.display()))?;
    let store = SqliteItemStore::try_new(&conn)
        .map_err(|err| err.to_string())?;
    let mut screen = ListScreen::new(store);
    screen.did_load();
    fail_on_error(screen.state())?;

    match command {
        Command::List | Command::Ping => {}
        Command::Add { title } => {
            if !screen.confirm_add(&title) {
                return Err("item title must not be empty".to_string());
            }
        }
        Command::Delete { position } => screen.confirm_delete(position),
        Command::Remove { id } => screen.confirm_delete_item(id),
    }
    fail_on_error(screen.state())?;

    info!(
        "event=cli_command module=cli status=ok rows={}",
        screen.state().len()
    );
    render(screen.state());
    Ok(())
}

fn fail_on_error(state: &ListState) -> Result<(), String> {
    match state.last_failure() {
        Some(failure) => Err(format!("{} ({})", failure.message, failure.kind.as_str())),
        None => Ok(()),
    }
}

fn render(state: &ListState) {
    if let Some(placeholder) = state.placeholder() {
        println!("{placeholder}");
        return;
    }
    for (position, row) in state.rows().iter().enumerate() {
        println!("{position}. {}  [{}]", row.title, row.id);
    }
}
