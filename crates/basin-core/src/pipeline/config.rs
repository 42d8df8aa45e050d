use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BLUR_SIGMA, DEFAULT_SCALE_K};
use crate::segment::Connectivity;
use crate::visualize::ColorStrategy;

/// A complete segmentation run: where to read, what to do, where to write.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SegmentationConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub method: MethodConfig,
    #[serde(default)]
    pub colors: ColorStrategy,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum MethodConfig {
    /// Bottom-up region merging, optionally preceded by a Gaussian blur.
    Agglomerative {
        k: f32,
        #[serde(default)]
        blur_sigma: Option<f32>,
    },
    /// Seeded basin labeling over the Sobel gradient of the input.
    Competitive {
        connectivity: Connectivity,
        /// (x, y, label) triples; empty selects the built-in ten-point pattern.
        seeds: Vec<(u32, u32, u32)>,
        /// Label the raw image instead of its gradient.
        #[serde(default)]
        skip_gradient: bool,
    },
}

impl Default for MethodConfig {
    fn default() -> Self {
        Self::Agglomerative {
            k: DEFAULT_SCALE_K,
            blur_sigma: Some(DEFAULT_BLUR_SIGMA),
        }
    }
}
