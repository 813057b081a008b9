use std::fs;
use std::path::Path;

use crate::error::{CannyRefError, Result};
use crate::grid::RgbGrid;

/// Parse a hex pixel dump into an RGB grid.
///
/// One text line per image row, whitespace-separated RRGGBB tokens.
/// Rows past `height` and tokens past `width` are ignored; pixels the
/// file does not cover stay black, matching the pre-zeroed memories of
/// the hardware testbench.
pub fn parse_pixel_grid(text: &str, width: usize, height: usize) -> Result<RgbGrid> {
    let mut grid = RgbGrid::zeros(height, width);

    for (row, line) in text.lines().enumerate() {
        if row >= height {
            break;
        }
        for (col, token) in line.split_whitespace().enumerate() {
            if col >= width {
                break;
            }
            let (r, g, b) =
                parse_rgb_token(token).map_err(|reason| CannyRefError::MalformedInput {
                    line: row + 1,
                    reason,
                })?;
            grid.red[[row, col]] = r;
            grid.green[[row, col]] = g;
            grid.blue[[row, col]] = b;
        }
    }

    Ok(grid)
}

/// Read a hex pixel dump from disk.
pub fn read_pixel_grid(path: &Path, width: usize, height: usize) -> Result<RgbGrid> {
    let text = fs::read_to_string(path)?;
    parse_pixel_grid(&text, width, height)
}

fn parse_rgb_token(token: &str) -> std::result::Result<(u8, u8, u8), String> {
    // Length is in bytes; the ASCII check keeps the slicing below on
    // character boundaries.
    if token.len() != 6 || !token.is_ascii() {
        return Err(format!("expected 6 hex digits, got {token:?}"));
    }
    let channel = |digits: &str| {
        u8::from_str_radix(digits, 16).map_err(|_| format!("invalid hex token {token:?}"))
    };
    Ok((
        channel(&token[0..2])?,
        channel(&token[2..4])?,
        channel(&token[4..6])?,
    ))
}
