use ndarray::Array2;

use crate::error::{CannyRefError, Result};

/// Map a padded-grid index back into the source range by mirroring
/// around the edge sample without duplicating it: index -1 reflects to
/// 1, index `len` reflects to `len - 2`.
fn mirror(index: isize, len: usize) -> usize {
    if index < 0 {
        (-index) as usize
    } else if index as usize >= len {
        2 * (len - 1) - index as usize
    } else {
        index as usize
    }
}

/// Extend a grid by `pad` rows and columns on every side with
/// reflect-101 boundary handling.
///
/// The center of the result is an exact copy of `src`; the border
/// reflects the second row/column inward, and corners reflect across
/// both axes. Fails when the source cannot supply `pad` mirrored
/// samples, i.e. when `2 * pad >= min(height, width)`.
pub fn reflect_pad<T: Copy>(src: &Array2<T>, pad: usize) -> Result<Array2<T>> {
    let (height, width) = src.dim();
    if 2 * pad >= height.min(width) {
        return Err(CannyRefError::PadTooLarge { pad, width, height });
    }

    Ok(Array2::from_shape_fn(
        (height + 2 * pad, width + 2 * pad),
        |(y, x)| {
            let src_y = mirror(y as isize - pad as isize, height);
            let src_x = mirror(x as isize - pad as isize, width);
            src[[src_y, src_x]]
        },
    ))
}
