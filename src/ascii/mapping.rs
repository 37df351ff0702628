//! Luminance to ASCII character mapping.

use super::charset::luma_to_char;
use super::grayscale::to_grayscale;
use super::grid::{PixelFormat, PixelGrid};
use super::resize::resize;
use crate::error::RenderError;

/// Map every luminance sample of a grid to a ramp character.
///
/// Samples are visited row-major (left to right, top to bottom). Each row of
/// the grid becomes one line of output and lines are joined with `\n`, so the
/// result has exactly `height` lines of exactly `width` characters. A grid
/// that is not single-channel is converted to luminance first.
///
/// # Example
/// ```
/// use ascii_generator::ascii::{grid_to_ascii, PixelGrid};
/// let grid = PixelGrid::luma(2, 2, vec![0, 255, 128, 64]).unwrap();
/// assert_eq!(grid_to_ascii(&grid), "@ \n=#");
/// ```
pub fn grid_to_ascii(grid: &PixelGrid) -> String {
    if grid.format() != PixelFormat::Luma {
        return grid_to_ascii(&to_grayscale(grid));
    }
    if grid.is_empty() {
        return String::new();
    }

    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let mut result = String::with_capacity((width + 1) * height);

    for (y, row) in grid.rows().enumerate() {
        if y > 0 {
            result.push('\n');
        }
        result.extend(row.iter().map(|&luma| luma_to_char(luma)));
    }

    result
}

/// Render a decoded image as ASCII art `width` characters wide.
///
/// Pipeline: resize (aspect-corrected) -> grayscale -> map to characters.
///
/// # Arguments
/// * `grid` - Decoded source image in any supported layout
/// * `width` - Output width in characters
///
/// # Returns
/// The rendered text, or [`RenderError::InvalidDimension`] if `width` or the
/// source width is zero.
pub fn render_ascii(grid: &PixelGrid, width: u32) -> Result<String, RenderError> {
    let resized = resize(grid, width)?;
    let gray = to_grayscale(&resized);
    Ok(grid_to_ascii(&gray))
}
