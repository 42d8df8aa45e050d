use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use image::codecs::hdr::HdrEncoder;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GrayImage, ImageFormat, Rgb, RgbImage, RgbaImage};

use crate::error::{BasinError, Result};
use crate::raster::Raster;

/// Decode an image file into a raster, keeping its natural channel count
/// (grayscale 1, RGB 3, RGBA 4). Zero-dimension files are rejected.
pub fn load_raster(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    decode(img)
}

/// Decode an image file as single-channel grayscale regardless of source
/// color.
pub fn load_raster_gray(path: &Path) -> Result<Raster> {
    let img = image::open(path)?;
    decode(DynamicImage::ImageLuma8(img.to_luma8()))
}

fn decode(img: DynamicImage) -> Result<Raster> {
    let (w, h) = (img.width(), img.height());
    if w == 0 || h == 0 {
        return Err(BasinError::InvalidDimensions {
            width: w,
            height: h,
        });
    }
    let color = img.color();
    let (channels, bytes) = if color.has_alpha() {
        (4, img.to_rgba8().into_raw())
    } else if color.has_color() {
        (3, img.to_rgb8().into_raw())
    } else {
        (1, img.to_luma8().into_raw())
    };
    Raster::from_bytes(w as usize, h as usize, channels, bytes)
}

/// Encode a raster, choosing the format from the file extension: png, bmp,
/// tga, jpg/jpeg (quality 100) or hdr. Anything else falls back to PNG.
/// Missing parent directories are created.
pub fn save_raster(raster: &Raster, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let img = to_dynamic(raster);
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("bmp") => img.save_with_format(path, ImageFormat::Bmp)?,
        Some("tga") => img.save_with_format(path, ImageFormat::Tga)?,
        Some("jpg" | "jpeg") => save_jpeg(&img, path)?,
        Some("hdr") => save_hdr(&img, path)?,
        _ => img.save_with_format(path, ImageFormat::Png)?,
    }
    Ok(())
}

fn to_dynamic(raster: &Raster) -> DynamicImage {
    let w = raster.width() as u32;
    let h = raster.height() as u32;
    let bytes: Vec<u8> = raster.data.iter().copied().collect();
    match raster.channels() {
        1 => DynamicImage::ImageLuma8(
            GrayImage::from_raw(w, h, bytes).expect("buffer size matches dimensions"),
        ),
        3 => DynamicImage::ImageRgb8(
            RgbImage::from_raw(w, h, bytes).expect("buffer size matches dimensions"),
        ),
        _ => DynamicImage::ImageRgba8(
            RgbaImage::from_raw(w, h, bytes).expect("buffer size matches dimensions"),
        ),
    }
}

fn save_jpeg(img: &DynamicImage, path: &Path) -> Result<()> {
    // JPEG carries no alpha; flatten to RGB. Quality pinned at 100.
    let rgb = img.to_rgb8();
    let file = File::create(path)?;
    let encoder = JpegEncoder::new_with_quality(BufWriter::new(file), 100);
    rgb.write_with_encoder(encoder)?;
    Ok(())
}

fn save_hdr(img: &DynamicImage, path: &Path) -> Result<()> {
    let rgb = img.to_rgb32f();
    let file = File::create(path)?;
    let encoder = HdrEncoder::new(BufWriter::new(file));
    let pixels: Vec<Rgb<f32>> = rgb.pixels().copied().collect();
    encoder.encode(&pixels, rgb.width() as usize, rgb.height() as usize)?;
    Ok(())
}
