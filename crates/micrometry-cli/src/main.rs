mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "micrometry", about = "Micrograph distance measurement tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show an image file's natural pixel dimensions
    Info(commands::info::InfoArgs),
    /// List objectives and their field-of-view diameters
    Lenses,
    /// Measure the distance between two marked points
    Measure(commands::measure::MeasureArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Lenses => commands::lenses::run(),
        Commands::Measure(args) => commands::measure::run(args),
    }
}
