//! Config command - inspect and create configuration files.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use console::style;

use medbill_core::models::config::MedbillConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the default configuration as JSON
    Show,

    /// Write a default configuration file
    Init {
        /// Destination path
        #[arg(default_value = "medbill.json")]
        path: PathBuf,
    },
}

pub async fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = MedbillConfig::default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { path } => {
            if path.exists() {
                anyhow::bail!("Config file already exists: {}", path.display());
            }
            MedbillConfig::default().save(&path)?;
            println!(
                "{} Default config written to {}",
                style("✓").green(),
                path.display()
            );
        }
    }

    Ok(())
}
