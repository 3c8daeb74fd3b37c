//! Configuration management commands for CLI.

use std::error::Error;
use std::path::PathBuf;

use clap::Subcommand;
use routinely_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Update configuration values
    Set {
        /// Calendar marker window in days
        #[arg(long)]
        window_days: Option<i64>,
        /// Snapshot file location
        #[arg(long)]
        snapshot_file: Option<PathBuf>,
    },
    /// Reset configuration to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load_or_default();
            println!("window_days = {}", config.window_days);
            match &config.snapshot_file {
                Some(path) => println!("snapshot_file = {}", path.display()),
                None => println!("snapshot_file = (default)"),
            }
        }
        ConfigAction::Set {
            window_days,
            snapshot_file,
        } => {
            let mut config = Config::load_or_default();
            if let Some(days) = window_days {
                if days < 0 {
                    return Err("window_days must be non-negative".into());
                }
                config.window_days = days;
            }
            if let Some(path) = snapshot_file {
                config.snapshot_file = Some(path);
            }
            config.save()?;
            println!("config updated");
        }
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}
