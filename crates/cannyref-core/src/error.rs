use thiserror::Error;

#[derive(Error, Debug)]
pub enum CannyRefError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Grid shape mismatch: expected {expected_width}x{expected_height}, got {width}x{height}")]
    ShapeMismatch {
        expected_width: usize,
        expected_height: usize,
        width: usize,
        height: usize,
    },

    #[error("Pad of {pad} needs a source larger than {width}x{height}")]
    PadTooLarge {
        pad: usize,
        width: usize,
        height: usize,
    },

    #[error("Low threshold {low} must be below high threshold {high}")]
    ThresholdOrder { low: u8, high: u8 },

    #[error("Malformed input at line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, CannyRefError>;
