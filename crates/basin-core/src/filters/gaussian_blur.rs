use ndarray::{s, Array2};
use rayon::prelude::*;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::{BasinError, Result};
use crate::raster::Raster;

/// Apply Gaussian blur to every channel of a raster using separable 1D
/// convolution.
///
/// Out-of-image samples clamp to the nearest edge pixel. Channels are blurred
/// independently in f32 and re-quantized to 8 bits; dimensions and channel
/// count never change.
pub fn gaussian_blur(raster: &Raster, sigma: f32) -> Result<Raster> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(BasinError::InvalidSigma(sigma));
    }

    let (h, w, channels) = raster.data.dim();
    let mut out = Raster::new(w, h, channels)?;
    if h == 0 || w == 0 {
        return Ok(out);
    }

    let kernel = make_gaussian_kernel(sigma);
    for ch in 0..channels {
        let plane = raster.data.slice(s![.., .., ch]).mapv(|v| v as f32);
        let blurred = convolve_cols(&convolve_rows(&plane, &kernel), &kernel);
        for row in 0..h {
            for col in 0..w {
                out.data[[row, col, ch]] = blurred[[row, col]].clamp(0.0, 255.0) as u8;
            }
        }
    }
    Ok(out)
}

/// Build a normalized 1D Gaussian kernel of radius `ceil(3 * sigma)`.
fn make_gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (sigma * 3.0).ceil() as usize;
    let size = 2 * radius + 1;
    let mut kernel = vec![0.0f32; size];
    let s2 = 2.0 * sigma * sigma;
    let mut sum = 0.0f32;

    for (i, k) in kernel.iter_mut().enumerate() {
        let x = i as f32 - radius as f32;
        *k = (-x * x / s2).exp();
        sum += *k;
    }

    for v in &mut kernel {
        *v /= sum;
    }

    kernel
}

fn convolve_rows(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;

    let row_pass = |row: usize| -> Vec<f32> {
        (0..w)
            .map(|col| {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let src_col = (col as isize + ki as isize - radius as isize)
                        .clamp(0, w as isize - 1) as usize;
                    sum += data[[row, src_col]] * kv;
                }
                sum
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(row_pass).collect()
    } else {
        (0..h).map(row_pass).collect()
    };

    collect_rows(rows, h, w)
}

fn convolve_cols(data: &Array2<f32>, kernel: &[f32]) -> Array2<f32> {
    let (h, w) = data.dim();
    let radius = kernel.len() / 2;

    let row_pass = |row: usize| -> Vec<f32> {
        (0..w)
            .map(|col| {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let src_row = (row as isize + ki as isize - radius as isize)
                        .clamp(0, h as isize - 1) as usize;
                    sum += data[[src_row, col]] * kv;
                }
                sum
            })
            .collect()
    };

    let rows: Vec<Vec<f32>> = if h * w >= PARALLEL_PIXEL_THRESHOLD {
        (0..h).into_par_iter().map(row_pass).collect()
    } else {
        (0..h).map(row_pass).collect()
    };

    collect_rows(rows, h, w)
}

fn collect_rows(rows: Vec<Vec<f32>>, h: usize, w: usize) -> Array2<f32> {
    let mut result = Array2::<f32>::zeros((h, w));
    for (row, row_data) in rows.into_iter().enumerate() {
        for (col, val) in row_data.into_iter().enumerate() {
            result[[row, col]] = val;
        }
    }
    result
}
