use ndarray::Array2;

use crate::consts::WINDOW_PAD;
use crate::error::{CannyRefError, Result};
use crate::grid::Direction;
use crate::pad::reflect_pad;

/// Thin gradient ridges by suppressing non-maximal pixels along the
/// quantized gradient direction.
///
/// An interior pixel survives only if its magnitude is >= both
/// neighbors picked by its direction bucket; ties keep the center.
/// The outer one-pixel ring of the output is always zero. Both planes
/// still pass through the padding stage first, matching the hardware
/// datapath, even though interior lookups never leave the source
/// region.
pub fn non_max_suppression(
    magnitude: &Array2<u8>,
    direction: &Array2<Direction>,
) -> Result<Array2<u8>> {
    let (height, width) = magnitude.dim();
    let (dir_height, dir_width) = direction.dim();
    if (dir_height, dir_width) != (height, width) {
        return Err(CannyRefError::ShapeMismatch {
            expected_width: width,
            expected_height: height,
            width: dir_width,
            height: dir_height,
        });
    }

    let padded_mag = reflect_pad(magnitude, WINDOW_PAD)?;
    let padded_dir = reflect_pad(direction, WINDOW_PAD)?;
    let mut suppressed = Array2::<u8>::zeros((height, width));

    for row in 0..height {
        for col in 0..width {
            if row == 0 || row == height - 1 || col == 0 || col == width - 1 {
                continue;
            }

            let (ahead, behind) = match padded_dir[[row + 1, col + 1]] {
                Direction::Deg0 => (
                    padded_mag[[row + 1, col + 2]],
                    padded_mag[[row + 1, col]],
                ),
                Direction::Deg90 => (
                    padded_mag[[row + 2, col + 1]],
                    padded_mag[[row, col + 1]],
                ),
                Direction::Deg45 => (
                    padded_mag[[row + 2, col + 2]],
                    padded_mag[[row, col]],
                ),
                Direction::Deg135 => (
                    padded_mag[[row + 2, col]],
                    padded_mag[[row, col + 2]],
                ),
            };

            let center = padded_mag[[row + 1, col + 1]];
            if center >= ahead && center >= behind {
                suppressed[[row, col]] = center;
            }
        }
    }

    Ok(suppressed)
}
