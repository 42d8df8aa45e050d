use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use basin_core::io::image_io::load_raster;

#[derive(Args)]
pub struct InfoArgs {
    /// Input image file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Dimensions:  {}x{}", raster.width(), raster.height());
    println!("Channels:    {}", raster.channels());
    println!("Pixels:      {}", raster.pixel_count());

    let bytes = raster.pixel_count() * raster.channels();
    println!("Data size:   {:.1} KB", bytes as f64 / 1024.0);

    Ok(())
}
