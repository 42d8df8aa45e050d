use crate::raster::Raster;

/// Cost of stepping between two adjacent pixels.
///
/// Implementations return non-negative values. A non-finite result means the
/// edge does not exist; the competitive segmenter never relaxes across it.
pub trait EdgeCost {
    fn cost(&self, from: usize, to: usize) -> f32;
}

/// Constant unit cost per step; path cost degenerates to hop count.
pub struct UniformCost;

impl EdgeCost for UniformCost {
    fn cost(&self, _from: usize, _to: usize) -> f32 {
        1.0
    }
}

/// Euclidean distance between the channel vectors of the two pixels of a
/// borrowed raster. Out-of-range indices cost infinity.
pub struct EuclideanCost<'a> {
    raster: &'a Raster,
}

impl<'a> EuclideanCost<'a> {
    pub fn new(raster: &'a Raster) -> Self {
        Self { raster }
    }
}

impl EdgeCost for EuclideanCost<'_> {
    fn cost(&self, from: usize, to: usize) -> f32 {
        let total = self.raster.pixel_count();
        if from >= total || to >= total {
            return f32::INFINITY;
        }
        self.raster.channel_distance(from, to)
    }
}
