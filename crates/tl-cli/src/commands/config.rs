//! Config command
//!
//! Manage threadline configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use std::fs;
use std::path::Path;

use tl_core::config::Config;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Reset to default configuration
    Reset {
        /// Force reset without confirmation
        #[arg(long)]
        force: bool,
    },

    /// Print where the configuration file lives
    Path,
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: &Path) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(config_path, json),
        ConfigCommand::Init { force } => init_config(config_path, force),
        ConfigCommand::Reset { force } => reset_config(config_path, force),
        ConfigCommand::Path => {
            println!("{}", config_path.display());
            Ok(())
        }
    }
}

fn show_config(config_path: &Path, as_json: bool) -> Result<()> {
    use colored::Colorize;

    let config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        eprintln!(
            "{} Configuration not found, showing defaults. Run '{}' to create.",
            "⚠".yellow(),
            "threadline config init".cyan()
        );
        Config::default()
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        println!("{}", "Configuration:".bold().underline());
        println!("{}", config_path.display().to_string().dimmed());
        println!();
        println!("{}", config.to_toml_string()?);
    }

    Ok(())
}

fn write_defaults(config_path: &Path) -> Result<()> {
    if let Some(parent) = config_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let content = format!(
        "# threadline configuration\n\n{}",
        Config::default().to_toml_string()?
    );
    fs::write(config_path, content)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    Ok(())
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    use colored::Colorize;

    if config_path.exists() && !force {
        eprintln!(
            "{} Configuration already exists at {}. Use --force to overwrite.",
            "⚠".yellow(),
            config_path.display()
        );
        return Ok(());
    }

    write_defaults(config_path)?;
    println!(
        "{} Wrote default configuration to {}",
        "✓".green(),
        config_path.display()
    );
    Ok(())
}

fn reset_config(config_path: &Path, force: bool) -> Result<()> {
    use colored::Colorize;

    if !force {
        use dialoguer::Confirm;

        let confirmed = Confirm::new()
            .with_prompt("Reset configuration to defaults?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("Reset cancelled.");
            return Ok(());
        }
    }

    // Backup existing
    if config_path.exists() {
        let backup_path = format!(
            "{}.backup-{}",
            config_path.display(),
            chrono::Local::now().format("%Y%m%d-%H%M%S")
        );
        fs::copy(config_path, &backup_path)?;
        println!("{} Backed up to {}", "✓".green(), backup_path);
    }

    write_defaults(config_path)?;
    println!("{} Configuration reset to defaults.", "✓".green());

    Ok(())
}
