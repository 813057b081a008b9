use ndarray::Array2;

use crate::error::{CannyRefError, Result};

/// Pixel-level agreement between a candidate edge map and a reference.
///
/// The counts follow the hardware verification convention: a false
/// positive is a candidate edge where the reference is empty, a false
/// negative a reference edge the candidate missed. "Edge" means any
/// nonzero value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComparisonReport {
    pub total_pixels: usize,
    pub matching_pixels: usize,
    pub reference_edges: usize,
    pub candidate_edges: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

impl ComparisonReport {
    /// True when the candidate reproduces the reference bit for bit.
    pub fn is_exact(&self) -> bool {
        self.matching_pixels == self.total_pixels
    }

    pub fn match_percentage(&self) -> f64 {
        percentage(self.matching_pixels, self.total_pixels)
    }

    pub fn reference_edge_percentage(&self) -> f64 {
        percentage(self.reference_edges, self.total_pixels)
    }

    pub fn candidate_edge_percentage(&self) -> f64 {
        percentage(self.candidate_edges, self.total_pixels)
    }

    pub fn false_positive_percentage(&self) -> f64 {
        percentage(self.false_positives, self.total_pixels)
    }

    pub fn false_negative_percentage(&self) -> f64 {
        percentage(self.false_negatives, self.total_pixels)
    }
}

/// Score a candidate edge map against the reference, pixel for pixel.
pub fn compare_edge_maps(
    reference: &Array2<u8>,
    candidate: &Array2<u8>,
) -> Result<ComparisonReport> {
    let (height, width) = reference.dim();
    let (cand_height, cand_width) = candidate.dim();
    if (cand_height, cand_width) != (height, width) {
        return Err(CannyRefError::ShapeMismatch {
            expected_width: width,
            expected_height: height,
            width: cand_width,
            height: cand_height,
        });
    }

    let mut report = ComparisonReport {
        total_pixels: height * width,
        matching_pixels: 0,
        reference_edges: 0,
        candidate_edges: 0,
        false_positives: 0,
        false_negatives: 0,
    };

    for (&ref_value, &cand_value) in reference.iter().zip(candidate.iter()) {
        if ref_value == cand_value {
            report.matching_pixels += 1;
        }
        if ref_value > 0 {
            report.reference_edges += 1;
        }
        if cand_value > 0 {
            report.candidate_edges += 1;
        }
        if ref_value == 0 && cand_value > 0 {
            report.false_positives += 1;
        }
        if ref_value > 0 && cand_value == 0 {
            report.false_negatives += 1;
        }
    }

    Ok(report)
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        100.0 * count as f64 / total as f64
    }
}
