//! Command-line front end for the flat-file task tracker.
//!
//! Usage:
//!
//! ```text
//! taskapp --email <EMAIL> --password <PASSWORD> <COMMAND>
//! ```
//!
//! Every command authenticates first. Storage locations come from the
//! optional `taskapp.toml` config file and can be overridden with
//! `--data-dir`.

use std::io::{self, Write};

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use taskapp::{app::TaskApp, config, logging};

#[derive(Parser, Debug)]
#[command(name = "taskapp", version, about = "Flat-file task tracker")]
struct Cli {
    /// Configuration file.
    #[arg(long, default_value = "taskapp.toml")]
    config: Utf8PathBuf,

    /// Directory holding the storage files, overriding the config file.
    #[arg(long)]
    data_dir: Option<Utf8PathBuf>,

    /// Login email address.
    #[arg(long)]
    email: String,

    /// Login password.
    #[arg(long)]
    password: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// List every task.
    List,
    /// Create a task.
    Create {
        /// New task code.
        #[arg(long)]
        code: u32,
        /// Task name.
        #[arg(long)]
        name: String,
        /// Code of the assigned user.
        #[arg(long)]
        assignee: u32,
    },
    /// Change a task's status (0 not started, 1 in progress, 2 done).
    Status {
        /// Task code.
        #[arg(long)]
        code: u32,
        /// Target status.
        #[arg(long)]
        status: u8,
    },
    /// Delete a finished task.
    Delete {
        /// Task code.
        #[arg(long)]
        code: u32,
    },
    /// Show the change log of a task.
    History {
        /// Task code.
        #[arg(long)]
        code: u32,
    },
}

fn main() -> eyre::Result<()> {
    let cli = Cli::parse();

    let mut settings = config::load(&cli.config)?;
    if let Some(dir) = cli.data_dir {
        settings.data_dir = dir.into_string();
    }
    logging::init(&settings.log_filter)?;

    let app = TaskApp::open(&settings.storage());
    let user = app.login(&cli.email, &cli.password)?;
    let mut out = io::stdout().lock();

    match cli.command {
        Command::List => {
            for listing in app.list_tasks(&user) {
                writeln!(out, "{listing}")?;
            }
        }
        Command::Create {
            code,
            name,
            assignee,
        } => {
            let task = app.create_task(code, &name, assignee, &user)?;
            writeln!(out, "registered task {}: {}", task.code(), task.name())?;
        }
        Command::Status { code, status } => {
            let task = app.advance_status(code, status, &user)?;
            writeln!(out, "task {} is now {}", task.code(), task.status())?;
        }
        Command::Delete { code } => {
            let task = app.delete_task(code)?;
            writeln!(out, "deleted task {}: {}", task.code(), task.name())?;
        }
        Command::History { code } => {
            for entry in app.history(code) {
                writeln!(
                    out,
                    "{} user {} set {}",
                    entry.changed_on(),
                    entry.changed_by(),
                    entry.status()
                )?;
            }
        }
    }
    Ok(())
}
