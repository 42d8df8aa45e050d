pub mod config;

use tracing::info;

use crate::consts::SEED_PATTERN;
use crate::error::Result;
use crate::filters::gaussian_blur::gaussian_blur;
use crate::filters::sobel::sobel_gradient;
use crate::io::image_io::{load_raster, save_raster};
use crate::raster::Raster;
use crate::segment::{agglomerative, CompetitiveSegmenter, EuclideanCost, SeedMap, UNLABELED};
use crate::visualize::colorize;

use self::config::{MethodConfig, SegmentationConfig};

/// Execute a configured run end to end: load, segment, colorize, save.
pub fn run_config(config: &SegmentationConfig) -> Result<()> {
    let raster = load_raster(&config.input)?;
    info!(
        width = raster.width(),
        height = raster.height(),
        channels = raster.channels(),
        "loaded input"
    );

    let colored = match &config.method {
        MethodConfig::Agglomerative { k, blur_sigma } => {
            let working = match blur_sigma {
                Some(sigma) => gaussian_blur(&raster, *sigma)?,
                None => raster,
            };
            let labels = agglomerative::segment(&working, *k)?;
            colorize(
                &labels,
                working.width(),
                working.height(),
                config.colors,
                None,
            )?
        }
        MethodConfig::Competitive {
            connectivity,
            seeds,
            skip_gradient,
        } => {
            let working = if *skip_gradient {
                raster
            } else {
                sobel_gradient(&raster)?
            };
            let seed_map = if seeds.is_empty() {
                pattern_seeds(&working)
            } else {
                explicit_seeds(&working, seeds)
            };
            let segmenter = CompetitiveSegmenter::new(&working, seed_map, *connectivity);
            let result = segmenter.run(&EuclideanCost::new(&working));
            colorize(
                &result.labels,
                working.width(),
                working.height(),
                config.colors,
                Some(UNLABELED),
            )?
        }
    };

    save_raster(&colored, &config.output)?;
    info!(output = %config.output.display(), "wrote segmentation");
    Ok(())
}

/// The fallback seed pattern: ten fixed relative positions scaled to the
/// raster, labeled 1..=10.
pub fn pattern_seeds(raster: &Raster) -> SeedMap {
    let w = raster.width();
    let h = raster.height();
    let mut seeds = SeedMap::new();
    if w == 0 || h == 0 {
        return seeds;
    }
    for (i, (rx, ry)) in SEED_PATTERN.iter().enumerate() {
        let x = (rx * (w - 1) as f32) as i64;
        let y = (ry * (h - 1) as f32) as i64;
        if let Some(pos) = raster.xy_to_index(x, y) {
            seeds.insert(pos, i as u32 + 1);
        }
    }
    seeds
}

fn explicit_seeds(raster: &Raster, triples: &[(u32, u32, u32)]) -> SeedMap {
    let mut seeds = SeedMap::new();
    for &(x, y, label) in triples {
        if let Some(pos) = raster.xy_to_index(x as i64, y as i64) {
            seeds.insert(pos, label);
        }
    }
    seeds
}
