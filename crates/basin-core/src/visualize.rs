use std::collections::{BTreeSet, HashMap, HashSet};

use rand::Rng;

use crate::consts::PALETTE_MULTIPLIERS;
use crate::error::{BasinError, Result};
use crate::raster::Raster;

/// How labels map to display colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub enum ColorStrategy {
    /// Deterministic: the ordinal of each label in the sorted distinct-label
    /// sequence is multiplied per channel and wrapped mod 256. Running twice
    /// on the same labels yields byte-identical output.
    #[default]
    Hashed,
    /// Random triples, rejection-sampled against the set already handed out
    /// so every label gets a unique color. Not seeded.
    Random,
}

/// Render a label buffer as a 3-channel raster, one distinct color per label.
///
/// `background`, when given, names a label that is painted black and takes no
/// palette entry (the competitive path passes its unlabeled sentinel).
pub fn colorize(
    labels: &[u32],
    width: usize,
    height: usize,
    strategy: ColorStrategy,
    background: Option<u32>,
) -> Result<Raster> {
    if labels.len() != width * height {
        return Err(BasinError::LabelLengthMismatch {
            got: labels.len(),
            width,
            height,
        });
    }

    let distinct: BTreeSet<u32> = labels
        .iter()
        .copied()
        .filter(|l| Some(*l) != background)
        .collect();

    let palette = match strategy {
        ColorStrategy::Hashed => hashed_palette(&distinct),
        ColorStrategy::Random => random_palette(&distinct),
    };

    let mut out = Raster::new(width, height, 3)?;
    for (i, label) in labels.iter().enumerate() {
        let (row, col) = (i / width, i % width);
        let rgb = palette.get(label).copied().unwrap_or([0, 0, 0]);
        out.data[[row, col, 0]] = rgb[0];
        out.data[[row, col, 1]] = rgb[1];
        out.data[[row, col, 2]] = rgb[2];
    }
    Ok(out)
}

fn hashed_palette(distinct: &BTreeSet<u32>) -> HashMap<u32, [u8; 3]> {
    let (mr, mg, mb) = PALETTE_MULTIPLIERS;
    distinct
        .iter()
        .enumerate()
        .map(|(j, &label)| {
            let j = j as u64;
            let rgb = [
                (j * mr as u64 % 256) as u8,
                (j * mg as u64 % 256) as u8,
                (j * mb as u64 % 256) as u8,
            ];
            (label, rgb)
        })
        .collect()
}

fn random_palette(distinct: &BTreeSet<u32>) -> HashMap<u32, [u8; 3]> {
    let mut rng = rand::thread_rng();
    let mut used = HashSet::new();
    distinct
        .iter()
        .map(|&label| {
            let rgb = loop {
                let candidate: [u8; 3] = [rng.gen(), rng.gen(), rng.gen()];
                if used.insert(candidate) {
                    break candidate;
                }
            };
            (label, rgb)
        })
        .collect()
}
