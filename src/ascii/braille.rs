//! Braille character rendering for high-resolution text art.
//!
//! Each braille character represents a 4-row by 2-column dot matrix, giving
//! 8 subpixels per terminal character cell. Dark samples raise dots, so the
//! output reads as ink on a light background.

use super::grayscale::to_grayscale;
use super::grid::{PixelFormat, PixelGrid};
use super::resize::resize;
use crate::error::RenderError;

/// Braille base character (U+2800, empty braille pattern).
pub const BRAILLE_BASE: char = '\u{2800}';

/// Default luminance threshold; samples strictly below it raise a dot.
pub const DEFAULT_THRESHOLD: i32 = 128;

/// Rows per braille cell.
pub const CELL_ROWS: u32 = 4;

/// Columns per braille cell.
pub const CELL_COLS: u32 = 2;

/// `(row, col)` of the dot stored in each bit, bit 0 first.
///
/// This is the standard 8-dot braille numbering: dots 1-3 run down the left
/// column, dots 4-6 down the right column, and dots 7 and 8 form the bottom
/// row.
/// ```text
/// (0,0)=bit0  (0,1)=bit3
/// (1,0)=bit1  (1,1)=bit4
/// (2,0)=bit2  (2,1)=bit5
/// (3,0)=bit6  (3,1)=bit7
/// ```
pub const DOT_POSITIONS: [(usize, usize); 8] = [
    (0, 0),
    (1, 0),
    (2, 0),
    (0, 1),
    (1, 1),
    (2, 1),
    (3, 0),
    (3, 1),
];

/// Convert a 4x2 dot block to a braille character.
///
/// # Arguments
/// * `block` - `block[row][col]` is true when the dot at that position is raised
///
/// # Returns
/// The corresponding braille character (U+2800 to U+28FF)
pub fn block_to_braille(block: [[bool; 2]; 4]) -> char {
    let mut code = 0u32;
    for (bit, &(row, col)) in DOT_POSITIONS.iter().enumerate() {
        if block[row][col] {
            code |= 1 << bit;
        }
    }
    // code <= 0xFF, so the sum stays inside the braille block
    char::from_u32(BRAILLE_BASE as u32 + code).unwrap_or(BRAILLE_BASE)
}

/// Crop a grid to the largest origin-anchored region made of whole cells.
///
/// Width is rounded down to a multiple of 2 and height to a multiple of 4;
/// the excess columns on the right and rows at the bottom are discarded.
pub fn crop_to_blocks(grid: &PixelGrid) -> PixelGrid {
    let new_w = grid.width() - grid.width() % CELL_COLS;
    let new_h = grid.height() - grid.height() % CELL_ROWS;

    if new_w == grid.width() && new_h == grid.height() {
        return grid.clone();
    }

    let channels = grid.format().channels();
    let row_bytes = new_w as usize * channels;
    let mut data = Vec::with_capacity(row_bytes * new_h as usize);
    for row in grid.rows().take(new_h as usize) {
        data.extend_from_slice(&row[..row_bytes]);
    }

    PixelGrid::from_parts(new_w, new_h, grid.format(), data)
}

/// Render a luminance grid as braille characters.
///
/// The grid is cropped with [`crop_to_blocks`], then split into 4x2 blocks
/// visited row by row. A sample raises its dot when `sample < threshold`, so
/// any `threshold <= 0` yields blank cells and any `threshold > 255` yields
/// full cells. Each block row becomes one output line; lines are joined with
/// `\n`. A grid narrower than 2 or shorter than 4 pixels renders as an empty
/// string. Multi-channel grids are converted to luminance first.
///
/// # Arguments
/// * `grid` - Source grid
/// * `threshold` - Luminance cutoff for raising a dot
pub fn grid_to_braille(grid: &PixelGrid, threshold: i32) -> String {
    if grid.format() != PixelFormat::Luma {
        return grid_to_braille(&to_grayscale(grid), threshold);
    }

    let cropped = crop_to_blocks(grid);
    if cropped.is_empty() {
        return String::new();
    }

    let cells_x = cropped.width() / CELL_COLS;
    let cells_y = cropped.height() / CELL_ROWS;
    let mut result = String::with_capacity((cells_x as usize * 3 + 1) * cells_y as usize);

    for cy in 0..cells_y {
        if cy > 0 {
            result.push('\n');
        }
        for cx in 0..cells_x {
            let mut block = [[false; 2]; 4];
            for (row, dots) in block.iter_mut().enumerate() {
                for (col, dot) in dots.iter_mut().enumerate() {
                    let x = cx * CELL_COLS + col as u32;
                    let y = cy * CELL_ROWS + row as u32;
                    // Cropping guarantees every block sample is in bounds
                    if let Some(luma) = cropped.luma_at(x, y) {
                        *dot = (luma as i32) < threshold;
                    }
                }
            }
            result.push(block_to_braille(block));
        }
    }

    result
}

/// Render a decoded image as braille art `width_in_cells` characters wide.
///
/// Each braille cell spans two pixel columns, so the image is resized to
/// `width_in_cells * 2` pixels before thresholding.
///
/// # Arguments
/// * `grid` - Decoded source image in any supported layout
/// * `width_in_cells` - Braille characters per output line
/// * `threshold` - Luminance cutoff for raising a dot (see [`DEFAULT_THRESHOLD`])
pub fn render_braille(
    grid: &PixelGrid,
    width_in_cells: u32,
    threshold: i32,
) -> Result<String, RenderError> {
    let target_width_px = width_in_cells.checked_mul(CELL_COLS).ok_or_else(|| {
        RenderError::invalid_dimension(format!(
            "braille width {} overflows the pixel width",
            width_in_cells
        ))
    })?;
    let resized = resize(grid, target_width_px)?;
    let gray = to_grayscale(&resized);
    Ok(grid_to_braille(&gray, threshold))
}
