use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use basin_core::filters::sobel::sobel_gradient;
use basin_core::io::image_io::{load_raster, save_raster};
use basin_core::pipeline::pattern_seeds;
use basin_core::raster::Raster;
use basin_core::segment::{
    CompetitiveSegmenter, Connectivity, EuclideanCost, SeedMap, UNLABELED,
};
use basin_core::visualize::colorize;

use super::parse_color_strategy;

#[derive(Args)]
pub struct CompetitiveArgs {
    /// Input image file
    pub file: PathBuf,

    /// Seed as "x,y,label" (repeatable); defaults to a fixed ten-point pattern
    #[arg(long = "seed")]
    pub seeds: Vec<String>,

    /// Neighborhood connectivity: 4 or 8
    #[arg(long, default_value_t = 8)]
    pub connectivity: u8,

    /// Label the raw image instead of its Sobel gradient
    #[arg(long)]
    pub raw: bool,

    /// Also write the decoded input to this path
    #[arg(long)]
    pub echo_input: Option<PathBuf>,

    /// Color strategy for the output: 'hashed' or 'random'
    #[arg(long, default_value = "random")]
    pub colors: String,

    /// Output file path
    #[arg(short, long, default_value = "output/output.png")]
    pub output: PathBuf,
}

pub fn run(args: &CompetitiveArgs) -> Result<()> {
    let strategy = parse_color_strategy(&args.colors)?;
    let connectivity = match args.connectivity {
        4 => Connectivity::Four,
        8 => Connectivity::Eight,
        other => anyhow::bail!("Connectivity must be 4 or 8, got {other}"),
    };

    let raster = load_raster(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    println!(
        "Loaded {}x{} image, {} channel(s)",
        raster.width(),
        raster.height(),
        raster.channels()
    );

    if let Some(ref echo) = args.echo_input {
        save_raster(&raster, echo)?;
        println!("Echoed input to {}", echo.display());
    }

    let working = if args.raw {
        raster
    } else {
        println!("Computing Sobel gradient");
        sobel_gradient(&raster)?
    };

    let seeds = if args.seeds.is_empty() {
        println!("No seeds given, using the fixed ten-point pattern");
        pattern_seeds(&working)
    } else {
        parse_seeds(&args.seeds, &working)?
    };
    println!("Flooding from {} seed(s)", seeds.len());

    let segmenter = CompetitiveSegmenter::new(&working, seeds, connectivity);
    let result = segmenter.run(&EuclideanCost::new(&working));

    let unreached = result.labels.iter().filter(|&&l| l == UNLABELED).count();
    println!(
        "Labeled {} pixel(s), {} unreached",
        result.labels.len() - unreached,
        unreached
    );

    let colored = colorize(
        &result.labels,
        working.width(),
        working.height(),
        strategy,
        Some(UNLABELED),
    )?;
    save_raster(&colored, &args.output)?;
    println!("Saved to {}", args.output.display());

    Ok(())
}

/// Parse repeated "x,y,label" triples into a seed map. Out-of-image seeds are
/// dropped; a position given twice keeps the last label.
fn parse_seeds(entries: &[String], raster: &Raster) -> Result<SeedMap> {
    let mut seeds = SeedMap::new();
    for entry in entries {
        let parts: Vec<i64> = entry
            .split(',')
            .map(|s| s.trim().parse::<i64>())
            .collect::<std::result::Result<_, _>>()
            .with_context(|| format!("Invalid seed '{entry}' (expected 'x,y,label')"))?;
        if parts.len() != 3 {
            anyhow::bail!("Seed requires exactly 3 values: x,y,label (got '{entry}')");
        }
        if parts[2] <= 0 || parts[2] > u32::MAX as i64 {
            anyhow::bail!("Seed label must be a positive integer (got '{entry}')");
        }
        if let Some(pos) = raster.xy_to_index(parts[0], parts[1]) {
            seeds.insert(pos, parts[2] as u32);
        }
    }
    Ok(seeds)
}
