use std::fmt;

use ndarray::Array2;

use crate::error::{CannyRefError, Result};

/// An RGB input image as three equal-shape channel planes.
/// Pixel values are u8, row-major, shape = (height, width).
#[derive(Clone, Debug)]
pub struct RgbGrid {
    pub red: Array2<u8>,
    pub green: Array2<u8>,
    pub blue: Array2<u8>,
}

impl RgbGrid {
    /// Assemble a grid from three channel planes of identical shape.
    pub fn new(red: Array2<u8>, green: Array2<u8>, blue: Array2<u8>) -> Result<Self> {
        let (height, width) = red.dim();
        for plane in [&green, &blue] {
            let (plane_height, plane_width) = plane.dim();
            if (plane_height, plane_width) != (height, width) {
                return Err(CannyRefError::ShapeMismatch {
                    expected_width: width,
                    expected_height: height,
                    width: plane_width,
                    height: plane_height,
                });
            }
        }
        Ok(Self { red, green, blue })
    }

    /// All-black grid of the given shape.
    pub fn zeros(height: usize, width: usize) -> Self {
        Self {
            red: Array2::zeros((height, width)),
            green: Array2::zeros((height, width)),
            blue: Array2::zeros((height, width)),
        }
    }

    pub fn width(&self) -> usize {
        self.red.ncols()
    }

    pub fn height(&self) -> usize {
        self.red.nrows()
    }
}

/// Gradient orientation quantized to four coarse buckets.
///
/// The Sobel stage assigns these directly from integer comparisons on
/// gx/gy; a continuous angle is never computed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    /// Horizontal gradient, vertical edge.
    #[default]
    Deg0,
    /// Rising diagonal (gx and gy share a sign).
    Deg45,
    /// Vertical gradient, horizontal edge.
    Deg90,
    /// Falling diagonal (gx and gy differ in sign).
    Deg135,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deg0 => write!(f, "0°"),
            Self::Deg45 => write!(f, "45°"),
            Self::Deg90 => write!(f, "90°"),
            Self::Deg135 => write!(f, "135°"),
        }
    }
}
