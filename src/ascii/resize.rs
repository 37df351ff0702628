//! Nearest-neighbor resampling of pixel grids.

use super::dimensions::target_dimensions;
use super::grid::PixelGrid;
use crate::error::RenderError;

/// Resize a grid to `new_width` pixels wide, correcting for glyph aspect.
///
/// The output height comes from [`target_dimensions`]. Each output pixel takes
/// the value of the source pixel its center falls on (nearest-neighbor), and
/// the channel layout is preserved, so the result can be fed to the grayscale
/// stage regardless of its source format.
///
/// # Arguments
/// * `grid` - Source grid in any layout
/// * `new_width` - Target width in pixels
///
/// # Returns
/// A new grid of `new_width x new_height` pixels. The height may be zero for
/// extremely wide sources, in which case the grid is empty.
pub fn resize(grid: &PixelGrid, new_width: u32) -> Result<PixelGrid, RenderError> {
    let (out_w, out_h) = target_dimensions(grid.width(), grid.height(), new_width)?;

    log::debug!(
        "Resizing {}x{} -> {}x{}",
        grid.width(),
        grid.height(),
        out_w,
        out_h
    );

    Ok(resample(grid, out_w, out_h))
}

/// Resample a grid to exact output dimensions using nearest-neighbor lookup.
pub fn resample(grid: &PixelGrid, out_w: u32, out_h: u32) -> PixelGrid {
    let format = grid.format();
    let channels = format.channels();

    if grid.is_empty() || out_w == 0 || out_h == 0 {
        return PixelGrid::from_parts(out_w, 0, format, Vec::new());
    }

    // Scale factors from output pixel grid to source image
    let scale_x = grid.width() as f64 / out_w as f64;
    let scale_y = grid.height() as f64 / out_h as f64;

    // Precompute source columns once, they are identical for every row
    let src_xs: Vec<u32> = (0..out_w)
        .map(|x| sample_coord(x, scale_x, grid.width()))
        .collect();

    let mut data = Vec::with_capacity(out_w as usize * out_h as usize * channels);
    for y in 0..out_h {
        let src_y = sample_coord(y, scale_y, grid.height());
        for &src_x in &src_xs {
            // Coordinates are clamped into range, so the lookup always succeeds
            if let Some(px) = grid.get(src_x, src_y) {
                data.extend_from_slice(px);
            }
        }
    }

    PixelGrid::from_parts(out_w, out_h, format, data)
}

/// Map an output coordinate to the source coordinate under its center.
#[inline]
fn sample_coord(out: u32, scale: f64, limit: u32) -> u32 {
    let src = ((out as f64 + 0.5) * scale) as u32;
    src.min(limit - 1)
}
