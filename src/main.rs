//! todo — a simple and efficient CLI todo manager.
//!
//! One command runs per process invocation: parse the CLI, open and
//! initialize the store, dispatch the command, close the store.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use todo_cli::cli::{self, Cli};
use todo_cli::db::Database;
use todo_cli::service::TaskService;
use todo_cli::{logging, paths};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let db_path = match &cli.database {
        Some(path) => path.clone(),
        None => paths::default_db_path()?,
    };
    debug!(path = %db_path.display(), "opening task database");

    let db = Database::open(&db_path).context("database initialization failed")?;

    // The service's handle is dropped when this closure returns, so the
    // explicit close below always acts on the last handle — on error paths
    // included.
    let outcome = (|| {
        db.initialize().context("failed to create tables")?;
        let service = TaskService::new(db.clone());
        cli::run(&cli.command, &service)
    })();

    let closed = db.close();
    outcome?;
    closed.context("failed to close database")?;
    Ok(())
}
