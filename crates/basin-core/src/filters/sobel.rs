use crate::consts::SOBEL_X;
use crate::error::Result;
use crate::raster::Raster;

/// Compute the Sobel gradient magnitude of a raster.
///
/// Multi-channel input collapses to the integer mean of each pixel's channels
/// before convolution. The output is a single-channel raster of the same
/// dimensions with magnitude `clamp(sqrt(gx^2 + gy^2), 0, 255)`.
///
/// The first and last row and column stay 0: the margin is not convolved at
/// all. Downstream the competitive segmenter therefore sees a one-pixel rim
/// of zero-cost pixels around the gradient image.
pub fn sobel_gradient(raster: &Raster) -> Result<Raster> {
    let h = raster.height();
    let w = raster.width();
    let mut out = Raster::new(w, h, 1)?;
    if h < 3 || w < 3 {
        return Ok(out);
    }

    for row in 1..h - 1 {
        for col in 1..w - 1 {
            let mut gx = 0i32;
            let mut gy = 0i32;
            for (ky, kernel_row) in SOBEL_X.iter().enumerate() {
                for (kx, &coeff) in kernel_row.iter().enumerate() {
                    let i = raster.index(row + ky - 1, col + kx - 1);
                    let value = raster.channel_mean(i) as i32;
                    gx += coeff * value;
                    // The vertical kernel is the transpose of the horizontal one.
                    gy += SOBEL_X[kx][ky] * value;
                }
            }
            let magnitude = ((gx * gx + gy * gy) as f64).sqrt() as i32;
            out.data[[row, col, 0]] = magnitude.clamp(0, 255) as u8;
        }
    }

    Ok(out)
}
