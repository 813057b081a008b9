use ndarray::Array2;

use crate::consts::{MIN_STRONG_NEIGHBORS, STRONG_EDGE, WEAK_EDGE, WINDOW_PAD};
use crate::error::{CannyRefError, Result};
use crate::pad::reflect_pad;

/// Classify a suppressed magnitude grid into strong and weak edges.
///
/// Values >= `high` become 255 in the strong grid, values in
/// [`low`, `high`) become 128 in the weak grid, everything else stays
/// zero in both. The two classes live in separate grids because the
/// hysteresis scan treats them as independent signals.
pub fn double_threshold(
    suppressed: &Array2<u8>,
    low: u8,
    high: u8,
) -> Result<(Array2<u8>, Array2<u8>)> {
    if low >= high {
        return Err(CannyRefError::ThresholdOrder { low, high });
    }

    let (height, width) = suppressed.dim();
    let mut strong = Array2::<u8>::zeros((height, width));
    let mut weak = Array2::<u8>::zeros((height, width));

    for row in 0..height {
        for col in 0..width {
            let value = suppressed[[row, col]];
            if value >= high {
                strong[[row, col]] = STRONG_EDGE;
            } else if value >= low {
                weak[[row, col]] = WEAK_EDGE;
            }
        }
    }

    Ok((strong, weak))
}

/// Link weak edges to strong ones in a single pass.
///
/// Strong pixels pass through unchanged. A weak pixel is promoted to
/// 255 when its 3x3 window over the reflect-padded strong grid holds
/// at least two strong cells. Promotion never feeds back: a pixel
/// promoted in this pass does not count as strong for any other weak
/// pixel.
pub fn hysteresis(strong: &Array2<u8>, weak: &Array2<u8>) -> Result<Array2<u8>> {
    let (height, width) = strong.dim();
    let (weak_height, weak_width) = weak.dim();
    if (weak_height, weak_width) != (height, width) {
        return Err(CannyRefError::ShapeMismatch {
            expected_width: width,
            expected_height: height,
            width: weak_width,
            height: weak_height,
        });
    }

    let padded_strong = reflect_pad(strong, WINDOW_PAD)?;
    let padded_weak = reflect_pad(weak, WINDOW_PAD)?;
    let mut edges = Array2::<u8>::zeros((height, width));

    for row in 0..height {
        for col in 0..width {
            if padded_strong[[row + 1, col + 1]] == STRONG_EDGE {
                edges[[row, col]] = STRONG_EDGE;
            } else if padded_weak[[row + 1, col + 1]] == WEAK_EDGE {
                let mut strong_count = 0u32;
                for dy in 0..3 {
                    for dx in 0..3 {
                        if padded_strong[[row + dy, col + dx]] == STRONG_EDGE {
                            strong_count += 1;
                        }
                    }
                }
                if strong_count >= MIN_STRONG_NEIGHBORS {
                    edges[[row, col]] = STRONG_EDGE;
                }
            }
        }
    }

    Ok(edges)
}
