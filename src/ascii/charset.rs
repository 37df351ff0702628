//! Character ramp used by the ASCII renderer.

/// Number of luminance buckets in [`ASCII_RAMP`].
pub const RAMP_LEVELS: usize = 10;

/// ASCII density ramp (10 levels).
/// Characters ordered from darkest (@) to lightest (space).
/// Works well on light backgrounds, where dense glyphs read as shadow.
pub const ASCII_RAMP: [char; RAMP_LEVELS] = ['@', '%', '#', '*', '+', '=', '-', ':', '.', ' '];

/// Bucket index for a luminance sample: `luma * 10 / 256`, always in `0..=9`.
#[inline]
pub fn ramp_index(luma: u8) -> usize {
    luma as usize * RAMP_LEVELS / 256
}

/// Ramp character for a luminance sample.
#[inline]
pub fn luma_to_char(luma: u8) -> char {
    ASCII_RAMP[ramp_index(luma)]
}
