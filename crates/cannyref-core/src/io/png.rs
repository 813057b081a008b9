use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};
use ndarray::Array2;

use crate::error::Result;

/// Save an 8-bit grid as a grayscale PNG for visual inspection.
pub fn save_grid_png(grid: &Array2<u8>, path: &Path) -> Result<()> {
    let (height, width) = grid.dim();

    let mut img = GrayImage::new(width as u32, height as u32);
    for row in 0..height {
        for col in 0..width {
            img.put_pixel(col as u32, row as u32, Luma([grid[[row, col]]]));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Load a grayscale PNG (or any image the backend decodes) into a u8
/// grid, converting color inputs to luminance.
pub fn load_grid_png(path: &Path) -> Result<Array2<u8>> {
    let img = image::open(path)?;
    let gray = img.to_luma8();
    let (width, height) = gray.dimensions();
    let mut grid = Array2::<u8>::zeros((height as usize, width as usize));

    for row in 0..height as usize {
        for col in 0..width as usize {
            grid[[row, col]] = gray.get_pixel(col as u32, row as u32).0[0];
        }
    }

    Ok(grid)
}
