use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};

use backup_rotate::cli::{handle_config_command, handle_plan_command, handle_run_command};
use backup_rotate::config::{resolve_config_path, Settings};

#[derive(Parser)]
#[command(
    name = "backup-rotate",
    version,
    about = "Scheduled single-file backup rotation",
    long_about = "backup-rotate compresses the backup file scheduled for today, \
                  copies it to a file server, deletes the files scheduled for the \
                  next few days, and emails the result to an operator."
)]
struct Cli {
    /// Path to the configuration file (JSON, or YAML by extension)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the backup rotation (default)
    Run {
        /// Run as if today were this date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Show what a run would do without changing anything
    Plan {
        /// Date to plan for (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Show the loaded configuration
    Config,
}

fn main() {
    let cli = Cli::parse();

    let code = match execute(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(code);
}

fn execute(cli: Cli) -> Result<i32> {
    let config_path = resolve_config_path(cli.config);
    let settings = Settings::load(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    let today = Local::now().date_naive();

    match cli.command.unwrap_or(Commands::Run { date: None }) {
        Commands::Run { date } => {
            let outcome = handle_run_command(&settings, date.unwrap_or(today));
            Ok(outcome.exit_code())
        }
        Commands::Plan { date } => {
            handle_plan_command(&settings, date.unwrap_or(today));
            Ok(0)
        }
        Commands::Config => {
            handle_config_command(&config_path, &settings, today);
            Ok(0)
        }
    }
}
