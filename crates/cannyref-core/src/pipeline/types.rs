use ndarray::Array2;

use crate::grid::Direction;

/// Pipeline processing stage, used for logging and stage dumps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Grayscale,
    GaussianBlur,
    Sobel,
    NonMaxSuppression,
    DoubleThreshold,
    Hysteresis,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Grayscale => write!(f, "Grayscale conversion"),
            Self::GaussianBlur => write!(f, "Gaussian blur"),
            Self::Sobel => write!(f, "Sobel gradient"),
            Self::NonMaxSuppression => write!(f, "Non-maximum suppression"),
            Self::DoubleThreshold => write!(f, "Double threshold"),
            Self::Hysteresis => write!(f, "Hysteresis linking"),
        }
    }
}

/// Every grid produced by one pipeline run.
///
/// All intermediates stay addressable so a hardware debug session can
/// diff any stage against a simulation trace, not just the final edge
/// map.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub gray: Array2<u8>,
    pub blurred: Array2<u8>,
    pub magnitude: Array2<u8>,
    pub direction: Array2<Direction>,
    pub suppressed: Array2<u8>,
    pub strong: Array2<u8>,
    pub weak: Array2<u8>,
    pub edges: Array2<u8>,
}

impl PipelineOutput {
    /// Edge population counts over the threshold and final grids.
    pub fn edge_stats(&self) -> EdgeStats {
        EdgeStats {
            total_pixels: self.edges.len(),
            strong_pixels: count_nonzero(&self.strong),
            weak_pixels: count_nonzero(&self.weak),
            edge_pixels: count_nonzero(&self.edges),
        }
    }
}

/// Pixel counts reported after a run.
#[derive(Clone, Copy, Debug)]
pub struct EdgeStats {
    pub total_pixels: usize,
    pub strong_pixels: usize,
    pub weak_pixels: usize,
    pub edge_pixels: usize,
}

impl EdgeStats {
    pub fn strong_percentage(&self) -> f64 {
        percentage(self.strong_pixels, self.total_pixels)
    }

    pub fn weak_percentage(&self) -> f64 {
        percentage(self.weak_pixels, self.total_pixels)
    }

    pub fn edge_percentage(&self) -> f64 {
        percentage(self.edge_pixels, self.total_pixels)
    }
}

fn count_nonzero(grid: &Array2<u8>) -> usize {
    grid.iter().filter(|&&value| value > 0).count()
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    }
}
