use ndarray::Array2;

use crate::consts::LUMA_SHIFT;
use crate::grid::RgbGrid;

/// Convert an RGB grid to 8-bit luminance with shift-add weighting.
///
/// Channel weights are Q0.11 fixed point:
///   gray = (613*R + 1203*G + 234*B) >> 11
///
/// Each product is expressed as a sum of power-of-two shifts, the same
/// decomposition the multiplier-free hardware datapath uses. The final
/// right shift truncates; there is no rounding term.
pub fn rgb_to_gray(rgb: &RgbGrid) -> Array2<u8> {
    let (height, width) = rgb.red.dim();
    let mut gray = Array2::<u8>::zeros((height, width));

    for row in 0..height {
        for col in 0..width {
            let r = rgb.red[[row, col]] as u32;
            let g = rgb.green[[row, col]] as u32;
            let b = rgb.blue[[row, col]] as u32;

            // 613 = 512 + 64 + 32 + 4 + 1
            let weighted_r = (r << 9) + (r << 6) + (r << 5) + (r << 2) + r;
            // 1203 = 1024 + 128 + 32 + 16 + 2 + 1
            let weighted_g = (g << 10) + (g << 7) + (g << 5) + (g << 4) + (g << 1) + g;
            // 234 = 128 + 64 + 32 + 8 + 2
            let weighted_b = (b << 7) + (b << 6) + (b << 5) + (b << 3) + (b << 1);

            let sum = weighted_r + weighted_g + weighted_b;
            gray[[row, col]] = ((sum >> LUMA_SHIFT) & 0xFF) as u8;
        }
    }

    gray
}
