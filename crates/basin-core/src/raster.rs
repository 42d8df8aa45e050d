use ndarray::{Array3, ArrayView1, ArrayViewMut1};

use crate::error::{BasinError, Result};

/// An owning 8-bit raster image.
///
/// Pixel data is row-major with shape `(height, width, channels)`, so the
/// linear index of the pixel at `(row, col)` is `row * width + col` and its
/// channel `c` lives at `data[[row, col, c]]`. This linear index is the key
/// every segmentation structure is addressed by.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    /// Pixel data, shape = (height, width, channels).
    pub data: Array3<u8>,
}

impl Raster {
    /// Create a zero-filled raster. Channel count must be 1, 3 or 4.
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self> {
        validate_channels(channels)?;
        Ok(Self {
            data: Array3::zeros((height, width, channels)),
        })
    }

    /// Build a raster from a flat byte buffer of length `width * height * channels`.
    pub fn from_bytes(
        width: usize,
        height: usize,
        channels: usize,
        bytes: Vec<u8>,
    ) -> Result<Self> {
        validate_channels(channels)?;
        let data = Array3::from_shape_vec((height, width, channels), bytes).map_err(|_| {
            BasinError::InvalidDimensions {
                width: width as u32,
                height: height as u32,
            }
        })?;
        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// Number of pixels (`width * height`).
    pub fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Linear index of the pixel at `(row, col)`.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width() + col
    }

    /// Recover `(row, col)` from a linear pixel index.
    pub fn coords(&self, i: usize) -> (usize, usize) {
        (i / self.width(), i % self.width())
    }

    /// Linear index for `(x, y)` image coordinates, or `None` when out of bounds.
    pub fn xy_to_index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || x as usize >= self.width() || y < 0 || y as usize >= self.height() {
            return None;
        }
        Some(y as usize * self.width() + x as usize)
    }

    /// Channel vector of pixel `i`. Panics when `i` is out of range.
    pub fn channel_slice(&self, i: usize) -> ArrayView1<'_, u8> {
        let (row, col) = self.coords(i);
        self.data.slice(ndarray::s![row, col, ..])
    }

    /// Mutable channel vector of pixel `i`.
    pub fn channel_slice_mut(&mut self, i: usize) -> ArrayViewMut1<'_, u8> {
        let (row, col) = self.coords(i);
        self.data.slice_mut(ndarray::s![row, col, ..])
    }

    /// Euclidean distance between the channel vectors of pixels `a` and `b`.
    pub fn channel_distance(&self, a: usize, b: usize) -> f32 {
        let pa = self.channel_slice(a);
        let pb = self.channel_slice(b);
        let mut sum = 0.0f32;
        for (&va, &vb) in pa.iter().zip(pb.iter()) {
            let diff = va as f32 - vb as f32;
            sum += diff * diff;
        }
        sum.sqrt()
    }

    /// Mean of pixel `i`'s channels, rounded down (integer mean).
    pub fn channel_mean(&self, i: usize) -> u8 {
        let p = self.channel_slice(i);
        let sum: u32 = p.iter().map(|&v| v as u32).sum();
        (sum / p.len() as u32) as u8
    }
}

fn validate_channels(channels: usize) -> Result<()> {
    match channels {
        1 | 3 | 4 => Ok(()),
        other => Err(BasinError::UnsupportedChannels(other)),
    }
}
