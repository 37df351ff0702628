//! Pixel grid to luminance conversion using the ITU-R BT.601 luma formula.

use super::grid::{PixelFormat, PixelGrid};

/// Luminance of one RGB triplet.
///
/// The formula is Y = 0.299*R + 0.587*G + 0.114*B, with the coefficients
/// scaled by 1000 so the hot path stays in integer math:
/// - R: 299/1000
/// - G: 587/1000
/// - B: 114/1000
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    // 299 + 587 + 114 = 1000, so the result never exceeds 255
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

/// Convert a grid in any supported layout to a single-channel luminance grid.
///
/// Width and height are preserved. Alpha channels are ignored; a grid that is
/// already `Luma` is copied as-is.
///
/// # Arguments
/// * `grid` - Source grid in `Luma`, `LumaAlpha`, `Rgb` or `Rgba` layout
///
/// # Returns
/// A new `Luma` grid with one sample (0-255) per pixel
pub fn to_grayscale(grid: &PixelGrid) -> PixelGrid {
    let pixel_count = grid.width() as usize * grid.height() as usize;
    let channels = grid.format().channels();

    let gray: Vec<u8> = match grid.format() {
        PixelFormat::Luma => grid.data().to_vec(),
        PixelFormat::LumaAlpha => grid.data().chunks_exact(channels).map(|px| px[0]).collect(),
        PixelFormat::Rgb | PixelFormat::Rgba => grid
            .data()
            .chunks_exact(channels)
            .map(|px| luminance(px[0], px[1], px[2]))
            .collect(),
    };
    debug_assert_eq!(gray.len(), pixel_count);

    PixelGrid::from_parts(grid.width(), grid.height(), PixelFormat::Luma, gray)
}
