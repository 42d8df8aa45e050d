use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use basin_core::filters::sobel::sobel_gradient;
use basin_core::io::image_io::{load_raster, save_raster};

#[derive(Args)]
pub struct GradientArgs {
    /// Input image file
    pub file: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "gradient.png")]
    pub output: PathBuf,
}

pub fn run(args: &GradientArgs) -> Result<()> {
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("Loaded {}x{} image", raster.width(), raster.height());

    let gradient = sobel_gradient(&raster)?;
    save_raster(&gradient, &args.output)?;
    println!("Saved gradient to {}", args.output.display());

    Ok(())
}
