mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "basin", about = "Graph-based image segmentation tool")]
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
    /// Show image file metadata
    Info(commands::info::InfoArgs),
    /// Apply a Gaussian blur to an image
    Blur(commands::blur::BlurArgs),
    /// Compute the Sobel gradient magnitude of an image
    Gradient(commands::gradient::GradientArgs),
    /// Segment by agglomerative region merging
    Agglomerative(commands::agglomerative::AgglomerativeArgs),
    /// Segment by seeded shortest-path labeling
    Competitive(commands::competitive::CompetitiveArgs),
    /// Print or save a default run config as TOML
    Config(commands::config::ConfigArgs),
    /// Execute a run described by a TOML config
    Run(commands::run::RunArgs),
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
        Commands::Blur(args) => commands::blur::run(args),
        Commands::Gradient(args) => commands::gradient::run(args),
        Commands::Agglomerative(args) => commands::agglomerative::run(args),
        Commands::Competitive(args) => commands::competitive::run(args),
        Commands::Config(args) => commands::config::run(args),
        Commands::Run(args) => commands::run::run(args),
    }
}
