use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "routinely", version, about = "Routinely CLI")]
struct Cli {
    /// Routine snapshot file (defaults to the configured location)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Routine management
    Routine {
        #[command(subcommand)]
        action: commands::routine::RoutineAction,
    },
    /// Task completion toggles
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Active routines and their status for a day
    Today {
        /// Anchor date (YYYY-MM-DD, defaults to the current day)
        #[arg(long)]
        date: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Calendar status markers around a day
    Calendar {
        /// Anchor date (YYYY-MM-DD, defaults to the current day)
        #[arg(long)]
        date: Option<String>,
        /// Days on each side of the anchor (defaults to the configured window)
        #[arg(long)]
        window: Option<i64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Current consecutive-completion streak
    Streak {
        /// Anchor date (YYYY-MM-DD, defaults to the current day)
        #[arg(long)]
        date: Option<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let log_spec = std::env::var("ROUTINELY_LOG").unwrap_or_else(|_| "warn".to_string());
    let _logger = flexi_logger::Logger::try_with_str(&log_spec)
        .and_then(|logger| logger.start())
        .map_err(|e| eprintln!("warning: failed to initialize logging: {e}"))
        .ok();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Routine { action } => commands::routine::run(action, &cli.file),
        Commands::Task { action } => commands::task::run(action, &cli.file),
        Commands::Today { date, json } => commands::today::run(&date, json, &cli.file),
        Commands::Calendar { date, window, json } => {
            commands::calendar::run(&date, window, json, &cli.file)
        }
        Commands::Streak { date } => commands::streak::run(&date, &cli.file),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
