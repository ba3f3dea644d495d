//! Config command - inspect and manage country configuration files.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;

use folha_core::CountryConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show a configuration file, or the built-in Brazilian tables
    Show {
        /// Configuration file to show
        path: Option<PathBuf>,
    },

    /// Initialize a new configuration file with the built-in tables
    Init(InitArgs),

    /// Check a configuration file for table-shape issues
    Validate {
        /// Configuration file to check
        path: PathBuf,
    },
}

#[derive(Args)]
struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = "country-config.json")]
    output: PathBuf,

    /// Overwrite existing file
    #[arg(long)]
    force: bool,
}

pub fn run(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show { path } => show_config(path),
        ConfigCommand::Init(init_args) => init_config(init_args),
        ConfigCommand::Validate { path } => validate_config(&path),
    }
}

fn show_config(path: Option<PathBuf>) -> anyhow::Result<()> {
    let config = match path {
        Some(path) => CountryConfig::from_file(&path)?,
        None => {
            println!(
                "{} No file given, showing the built-in Brazilian tables.",
                style("ℹ").blue()
            );
            CountryConfig::brazil()
        }
    };

    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(args: InitArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            args.output.display()
        );
    }

    // Create parent directory if needed
    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let config = CountryConfig::brazil();
    config.save(&args.output)?;

    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        args.output.display()
    );

    Ok(())
}

fn validate_config(path: &Path) -> anyhow::Result<()> {
    let config = CountryConfig::from_file(path)?;
    let issues = config.validate();

    if issues.is_empty() {
        println!(
            "{} Configuration at {} looks sound",
            style("✓").green(),
            path.display()
        );
    } else {
        println!("{}", style("Configuration issues:").yellow());
        for issue in &issues {
            println!("  - {}", issue);
        }
    }

    Ok(())
}
