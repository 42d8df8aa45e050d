use thiserror::Error;

#[derive(Error, Debug)]
pub enum BasinError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Unsupported channel count: {0} (expected 1, 3 or 4)")]
    UnsupportedChannels(usize),

    #[error("Invalid scale parameter k = {0} (must be positive and finite)")]
    InvalidScale(f32),

    #[error("Invalid blur sigma = {0} (must be positive and finite)")]
    InvalidSigma(f32),

    #[error("Label buffer length {got} does not match {width}x{height}")]
    LabelLengthMismatch {
        got: usize,
        width: usize,
        height: usize,
    },
}

pub type Result<T> = std::result::Result<T, BasinError>;
