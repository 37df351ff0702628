//! Image file loading.
//!
//! Decoding is delegated to the `image` crate; this module only turns its
//! output into a [`PixelGrid`].

use std::path::Path;

use image::DynamicImage;

use crate::ascii::{PixelFormat, PixelGrid};
use crate::error::RenderError;

/// Open and decode an image file.
///
/// 8-bit grayscale, grayscale+alpha, RGB and RGBA images keep their channel
/// layout. Everything else (16-bit, float) is converted to 8-bit RGBA.
pub fn decode(path: impl AsRef<Path>) -> Result<PixelGrid, RenderError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| RenderError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    from_dynamic(img)
}

/// Convert an already-decoded image into a pixel grid.
pub fn from_dynamic(img: DynamicImage) -> Result<PixelGrid, RenderError> {
    let (width, height) = (img.width(), img.height());
    match img {
        DynamicImage::ImageLuma8(buf) => {
            PixelGrid::new(width, height, PixelFormat::Luma, buf.into_raw())
        }
        DynamicImage::ImageLumaA8(buf) => {
            PixelGrid::new(width, height, PixelFormat::LumaAlpha, buf.into_raw())
        }
        DynamicImage::ImageRgb8(buf) => {
            PixelGrid::new(width, height, PixelFormat::Rgb, buf.into_raw())
        }
        DynamicImage::ImageRgba8(buf) => {
            PixelGrid::new(width, height, PixelFormat::Rgba, buf.into_raw())
        }
        other => PixelGrid::new(width, height, PixelFormat::Rgba, other.to_rgba8().into_raw()),
    }
}
