use ndarray::Array2;

use crate::consts::WINDOW_PAD;
use crate::error::Result;
use crate::grid::Direction;
use crate::pad::reflect_pad;

/// Compute gradient magnitude and quantized direction with 3x3 Sobel
/// kernels.
///
/// Sobel kernels:
///   Gx = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]]
///   Gy = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]]
///
/// Magnitude is the |gx| + |gy| approximation halved by a truncating
/// shift, then saturated to 255. Every pixel gets a value, border
/// included, thanks to the reflect-101 pad.
pub fn sobel(blurred: &Array2<u8>) -> Result<(Array2<u8>, Array2<Direction>)> {
    let (height, width) = blurred.dim();
    let padded = reflect_pad(blurred, WINDOW_PAD)?;
    let mut magnitude = Array2::<u8>::zeros((height, width));
    let mut direction = Array2::<Direction>::default((height, width));

    for row in 0..height {
        for col in 0..width {
            let gx = padded[[row, col + 2]] as i32 - padded[[row, col]] as i32
                + ((padded[[row + 1, col + 2]] as i32) << 1)
                - ((padded[[row + 1, col]] as i32) << 1)
                + padded[[row + 2, col + 2]] as i32
                - padded[[row + 2, col]] as i32;

            let gy = padded[[row + 2, col]] as i32
                + ((padded[[row + 2, col + 1]] as i32) << 1)
                + padded[[row + 2, col + 2]] as i32
                - padded[[row, col]] as i32
                - ((padded[[row, col + 1]] as i32) << 1)
                - padded[[row, col + 2]] as i32;

            magnitude[[row, col]] = ((gx.abs() + gy.abs()) >> 1).min(255) as u8;
            direction[[row, col]] = quantize_direction(gx, gy);
        }
    }

    Ok((magnitude, direction))
}

/// Map raw gradients onto the four direction buckets.
///
/// The branch order is part of the contract: a zero gradient is 0°,
/// a strictly dominant |gy| is 90°, then |gy| < |gx| - (|gx| >> 2)
/// picks 0° (the shift stands in for tan(22.5°)), and everything left
/// is diagonal, split by whether gx and gy share a sign.
fn quantize_direction(gx: i32, gy: i32) -> Direction {
    let abs_gx = gx.abs();
    let abs_gy = gy.abs();

    if abs_gx == 0 && abs_gy == 0 {
        Direction::Deg0
    } else if abs_gy > abs_gx {
        Direction::Deg90
    } else if abs_gy < abs_gx - (abs_gx >> 2) {
        Direction::Deg0
    } else if (gx >= 0 && gy >= 0) || (gx < 0 && gy < 0) {
        Direction::Deg45
    } else {
        Direction::Deg135
    }
}
