use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use basin_core::consts::DEFAULT_BLUR_SIGMA;
use basin_core::filters::gaussian_blur::gaussian_blur;
use basin_core::io::image_io::{load_raster, save_raster};

#[derive(Args)]
pub struct BlurArgs {
    /// Input image file
    pub file: PathBuf,

    /// Gaussian blur sigma
    #[arg(long, default_value_t = DEFAULT_BLUR_SIGMA)]
    pub sigma: f32,

    /// Output file path
    #[arg(short, long, default_value = "blurred.png")]
    pub output: PathBuf,
}

pub fn run(args: &BlurArgs) -> Result<()> {
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!(
        "Loaded {}x{} image, {} channel(s)",
        raster.width(),
        raster.height(),
        raster.channels()
    );
    println!("Applying Gaussian blur: sigma={}", args.sigma);

    let blurred = gaussian_blur(&raster, args.sigma)?;
    save_raster(&blurred, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
