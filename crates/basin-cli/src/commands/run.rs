use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use basin_core::pipeline::{config::SegmentationConfig, run_config};

#[derive(Args)]
pub struct RunArgs {
    /// TOML run configuration file
    pub config: PathBuf,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read {}", args.config.display()))?;
    let config: SegmentationConfig = toml::from_str(&text)
        .with_context(|| format!("Invalid config in {}", args.config.display()))?;

    run_config(&config)?;
    println!("Wrote {}", config.output.display());

    Ok(())
}
