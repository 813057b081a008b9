use ndarray::Array2;

use crate::consts::{BLUR_NORM_SHIFT, BLUR_ROUND_BIAS, WINDOW_PAD};
use crate::error::Result;
use crate::pad::reflect_pad;

/// Smooth a grayscale grid with the 3x3 Gaussian kernel.
///
/// Kernel (divided by 16):
///   [1, 2, 1]
///   [2, 4, 2]
///   [1, 2, 1]
///
/// The 2x and 4x taps are left shifts and the division is a right
/// shift after adding a bias of 8, so exact halves round up the way
/// the hardware divider does. Boundaries come from a reflect-101 pad,
/// so the output keeps the input shape.
pub fn gaussian_blur(gray: &Array2<u8>) -> Result<Array2<u8>> {
    let (height, width) = gray.dim();
    let padded = reflect_pad(gray, WINDOW_PAD)?;
    let mut blurred = Array2::<u8>::zeros((height, width));

    for row in 0..height {
        for col in 0..width {
            let window_sum = padded[[row, col]] as u32
                + ((padded[[row, col + 1]] as u32) << 1)
                + padded[[row, col + 2]] as u32
                + ((padded[[row + 1, col]] as u32) << 1)
                + ((padded[[row + 1, col + 1]] as u32) << 2)
                + ((padded[[row + 1, col + 2]] as u32) << 1)
                + padded[[row + 2, col]] as u32
                + ((padded[[row + 2, col + 1]] as u32) << 1)
                + padded[[row + 2, col + 2]] as u32;

            blurred[[row, col]] = ((window_sum + BLUR_ROUND_BIAS) >> BLUR_NORM_SHIFT) as u8;
        }
    }

    Ok(blurred)
}
