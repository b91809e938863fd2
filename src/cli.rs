//! CLI command definitions and dispatch.
//!
//! This module defines the CLI structure using clap's derive macros and
//! executes exactly one service operation per invocation. Superficial
//! validation (title length, positive ids, the clear confirmation) happens
//! here, before the service is called.

use crate::service::TaskService;
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Minimum accepted task title length, in characters.
pub const MIN_TITLE_LEN: usize = 3;

/// A simple and efficient CLI todo manager
#[derive(Parser, Debug)]
#[command(name = "todo", author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the database file (defaults to ~/.todo.db)
    #[arg(short, long, global = true)]
    pub database: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new task to the list
    #[command(visible_aliases = ["a", "new"])]
    Add {
        /// Task description
        title: String,
    },

    /// List tasks
    #[command(visible_aliases = ["l", "ls"])]
    List {
        /// Show all tasks (default)
        #[arg(long, conflicts_with_all = ["completed", "pending"])]
        all: bool,

        /// Show only completed tasks
        #[arg(long, conflicts_with = "pending")]
        completed: bool,

        /// Show only pending tasks
        #[arg(long)]
        pending: bool,
    },

    /// Mark a task as completed
    #[command(visible_aliases = ["d", "complete"])]
    Done {
        /// Task id
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,
    },

    /// Delete a task
    #[command(visible_aliases = ["rm", "remove"])]
    Delete {
        /// Task id
        #[arg(value_parser = clap::value_parser!(i64).range(1..))]
        id: i64,
    },

    /// Delete all tasks
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Execute one parsed command against the service.
pub fn run(command: &Command, service: &TaskService) -> Result<()> {
    match command {
        Command::Add { title } => {
            if title.chars().count() < MIN_TITLE_LEN {
                bail!("task description too short (minimum {MIN_TITLE_LEN} characters)");
            }
            let task = service.add_task(title).context("failed to add task")?;
            println!("Successfully added task: {}", task.title);
        }
        Command::List {
            completed, pending, ..
        } => {
            let listing = if *completed {
                service.list_by_status(true)
            } else if *pending {
                service.list_pending_tasks()
            } else {
                service.list_all_tasks()
            }
            .context("failed to list tasks")?;
            print!("{listing}");
        }
        Command::Done { id } => {
            service
                .complete_task(*id)
                .context("failed to complete task")?;
            println!("Task {id} marked as completed");
        }
        Command::Delete { id } => {
            service.delete_task(*id).context("failed to delete task")?;
            println!("Task {id} deleted successfully");
        }
        Command::Clear { yes } => {
            if *yes || confirm("Are you sure you want to delete all tasks? [y/N]: ")? {
                service.clear_tasks().context("failed to clear tasks")?;
                println!("All tasks have been deleted");
            } else {
                println!("Operation cancelled");
            }
        }
    }
    Ok(())
}

/// Prompt on stdout and read a yes/no answer from stdin.
fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_aliases_parse() {
        for alias in ["add", "a", "new"] {
            let cli = Cli::try_parse_from(["todo", alias, "Buy milk"]).unwrap();
            match cli.command {
                Command::Add { title } => assert_eq!(title, "Buy milk"),
                other => panic!("expected add, got {other:?}"),
            }
        }
    }

    #[test]
    fn done_rejects_non_positive_ids() {
        assert!(Cli::try_parse_from(["todo", "done", "0"]).is_err());
        assert!(Cli::try_parse_from(["todo", "done", "-1"]).is_err());
        assert!(Cli::try_parse_from(["todo", "done", "abc"]).is_err());
    }

    #[test]
    fn delete_aliases_parse() {
        for alias in ["delete", "rm", "remove"] {
            let cli = Cli::try_parse_from(["todo", alias, "7"]).unwrap();
            match cli.command {
                Command::Delete { id } => assert_eq!(id, 7),
                other => panic!("expected delete, got {other:?}"),
            }
        }
    }

    #[test]
    fn list_filter_flags_conflict() {
        assert!(Cli::try_parse_from(["todo", "list", "--completed", "--pending"]).is_err());
        assert!(Cli::try_parse_from(["todo", "list", "--all", "--completed"]).is_err());
    }

    #[test]
    fn global_database_flag_parses_after_subcommand() {
        let cli = Cli::try_parse_from(["todo", "list", "--database", "/tmp/t.db"]).unwrap();
        assert_eq!(cli.database, Some(PathBuf::from("/tmp/t.db")));
    }
}
