//! Text renderer module for converting images to ASCII or braille art.
//!
//! Both output styles share the same front half of the pipeline:
//!
//! 1. **Resizing** - Scale to the target width with glyph aspect correction
//! 2. **Grayscale conversion** - Any layout to luminance using BT.601
//! 3. **Symbol mapping** - either
//!    - **ASCII** - 10-level character ramp, one character per pixel
//!    - **Braille** - 4x2 pixel blocks thresholded into 8-dot cells
//!
//! [`render`] dispatches on a [`RenderMode`] and runs the whole pipeline.

pub mod braille;
mod charset;
mod dimensions;
mod grayscale;
mod grid;
mod mapping;
mod mode;
mod resize;

pub use braille::{
    block_to_braille, crop_to_blocks, grid_to_braille, render_braille, BRAILLE_BASE,
    DEFAULT_THRESHOLD, DOT_POSITIONS,
};
pub use charset::{luma_to_char, ramp_index, ASCII_RAMP, RAMP_LEVELS};
pub use dimensions::{target_dimensions, CHAR_ASPECT_CORRECTION};
pub use grayscale::{luminance, to_grayscale};
pub use grid::{PixelFormat, PixelGrid};
pub use mapping::{grid_to_ascii, render_ascii};
pub use mode::{render, Mode, RenderMode};
pub use resize::{resample, resize};
