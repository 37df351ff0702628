//! Dimension calculation for aspect-ratio-correct text rendering.

use crate::error::RenderError;

/// Height correction applied when converting pixel rows to text rows.
///
/// A monospace glyph is roughly twice as tall as it is wide, so the output
/// keeps only about half of the rows the source aspect ratio would suggest.
pub const CHAR_ASPECT_CORRECTION: f64 = 0.55;

/// Calculate the resized pixel dimensions for a target width.
///
/// The height follows the source aspect ratio, scaled by
/// [`CHAR_ASPECT_CORRECTION`] so the rendered text is not stretched
/// vertically:
///
/// ```text
/// new_height = round(new_width * (img_height / img_width) * 0.55)
/// ```
///
/// # Arguments
/// * `img_width` - Width of the source image in pixels
/// * `img_height` - Height of the source image in pixels
/// * `new_width` - Target width in pixels
///
/// # Returns
/// `(new_width, new_height)`, or [`RenderError::InvalidDimension`] when the
/// target width or the source width is zero.
///
/// # Example
/// ```
/// use ascii_generator::ascii::target_dimensions;
/// // 200x100 source at 100 columns: 100 * 0.5 * 0.55 = 27.5 -> 28 rows
/// assert_eq!(target_dimensions(200, 100, 100).unwrap(), (100, 28));
/// ```
pub fn target_dimensions(
    img_width: u32,
    img_height: u32,
    new_width: u32,
) -> Result<(u32, u32), RenderError> {
    if new_width == 0 {
        return Err(RenderError::invalid_dimension(
            "target width must be greater than 0",
        ));
    }
    if img_width == 0 {
        return Err(RenderError::invalid_dimension("source image has zero width"));
    }

    let aspect_ratio = img_height as f64 / img_width as f64;
    let new_height = (new_width as f64 * aspect_ratio * CHAR_ASPECT_CORRECTION).round();

    // Saturate rather than wrap for absurdly tall sources
    let new_height = if new_height >= u32::MAX as f64 {
        u32::MAX
    } else {
        new_height as u32
    };

    Ok((new_width, new_height))
}
