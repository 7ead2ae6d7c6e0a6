// CLI module for server startup and administrative operations

pub mod migrate;
pub mod seed;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::app_data::AppData;

/// Club review backend CLI
#[derive(Parser, Debug)]
#[command(name = "clubreview")]
#[command(about = "Club review backend server and tools", long_about = None)]
pub struct Cli {
    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Apply migrations and start the HTTP server
    Serve,

    /// Apply pending database migrations and exit
    Migrate,

    /// Load clubs from a JSON file, skipping ones that already exist
    Seed {
        /// Path to a JSON array of {code, name, description?, tags?}
        #[arg(short, long)]
        file: PathBuf,
    },
}

/// Execute a non-server CLI command
///
/// `serve` is handled by the binary since it owns the listener.
pub async fn execute_command(
    command: Commands,
    app_data: Arc<AppData>,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Serve => {}
        Commands::Migrate => migrate::run_migrations(&app_data).await?,
        Commands::Seed { file } => {
            migrate::run_migrations(&app_data).await?;
            let clubs = seed::load_seed_file(&file)?;
            let report = seed::seed_clubs(&app_data, clubs).await?;
            println!(
                "Seeded {} club(s), skipped {} existing",
                report.created, report.skipped
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["clubreview"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_seed_requires_file() {
        assert!(Cli::try_parse_from(["clubreview", "seed"]).is_err());

        let cli = Cli::try_parse_from(["clubreview", "seed", "--file", "clubs.json"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Seed { file: PathBuf::from("clubs.json") })
        );
    }
}
