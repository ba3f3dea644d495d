//! CLI application for Brazilian payslip parsing and salary analysis.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{calculate, config, parse};

/// Brazilian payslip analysis - parse OCR dumps and compute net salary
#[derive(Parser)]
#[command(name = "folha")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a country configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse an OCR dump into a structured payslip document
    Parse(parse::ParseArgs),

    /// Compute a net-salary breakdown and insights from a salary input
    Calculate(calculate::CalculateArgs),

    /// Manage country configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Parse(args) => parse::run(args),
        Commands::Calculate(args) => calculate::run(args, cli.config.as_deref()),
        Commands::Config(args) => config::run(args),
    }
}
