use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use basin_core::consts::{DEFAULT_BLUR_SIGMA, DEFAULT_SCALE_K};
use basin_core::filters::gaussian_blur::gaussian_blur;
use basin_core::io::image_io::{load_raster, load_raster_gray, save_raster};
use basin_core::segment::agglomerative;
use basin_core::visualize::colorize;

use super::parse_color_strategy;

#[derive(Args)]
pub struct AgglomerativeArgs {
    /// Input image file
    pub file: PathBuf,

    /// Scale parameter; higher values produce fewer, larger segments
    #[arg(long, default_value_t = DEFAULT_SCALE_K)]
    pub k: f32,

    /// Pre-blur sigma; 0 disables the blur
    #[arg(long, default_value_t = DEFAULT_BLUR_SIGMA)]
    pub blur: f32,

    /// Decode the image as grayscale before segmenting
    #[arg(long)]
    pub grayscale: bool,

    /// Color strategy for the output: 'hashed' or 'random'
    #[arg(long, default_value = "hashed")]
    pub colors: String,

    /// Output file path
    #[arg(short, long, default_value = "segmentation_output.png")]
    pub output: PathBuf,
}

pub fn run(args: &AgglomerativeArgs) -> Result<()> {
    let strategy = parse_color_strategy(&args.colors)?;
    let mut raster = if args.grayscale {
        load_raster_gray(&args.file)
    } else {
        load_raster(&args.file)
    }
    .with_context(|| format!("Failed to load {}", args.file.display()))?;

    println!(
        "Loaded {}x{} image, {} channel(s)",
        raster.width(),
        raster.height(),
        raster.channels()
    );

    if args.blur > 0.0 {
        println!("Applying Gaussian blur: sigma={}", args.blur);
        raster = gaussian_blur(&raster, args.blur)?;
    }

    println!("Segmenting with k={}", args.k);
    let labels = agglomerative::segment(&raster, args.k)?;

    let segments: BTreeSet<u32> = labels.iter().copied().collect();
    println!("Found {} segment(s)", segments.len());

    let colored = colorize(&labels, raster.width(), raster.height(), strategy, None)?;
    save_raster(&colored, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
