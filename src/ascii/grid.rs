//! Flat row-major pixel buffer shared by every pipeline stage.

use crate::error::RenderError;

/// Channel layout of a [`PixelGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Single-channel luminance (1 byte per pixel)
    Luma,
    /// Luminance plus alpha (2 bytes per pixel)
    LumaAlpha,
    /// RGB (3 bytes per pixel)
    Rgb,
    /// RGB plus alpha (4 bytes per pixel)
    Rgba,
}

impl PixelFormat {
    /// Number of samples stored per pixel.
    pub fn channels(&self) -> usize {
        match self {
            PixelFormat::Luma => 1,
            PixelFormat::LumaAlpha => 2,
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// A 2-D image stored as a flat row-major byte buffer.
///
/// Stages never mutate a grid in place; each one returns a new grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Vec<u8>,
}

impl PixelGrid {
    /// Wrap a pixel buffer, checking that its length matches the geometry.
    pub fn new(
        width: u32,
        height: u32,
        format: PixelFormat,
        data: Vec<u8>,
    ) -> Result<Self, RenderError> {
        let expected = width as usize * height as usize * format.channels();
        if data.len() != expected {
            return Err(RenderError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            format,
            data,
        })
    }

    /// Wrap a single-channel luminance buffer.
    pub fn luma(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RenderError> {
        Self::new(width, height, PixelFormat::Luma, data)
    }

    /// A grid of the given size where every luminance sample equals `value`.
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            width,
            height,
            format: PixelFormat::Luma,
            data: vec![value; width as usize * height as usize],
        }
    }

    /// Build a grid whose buffer is already known to be correctly sized.
    pub(crate) fn from_parts(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            data.len(),
            width as usize * height as usize * format.channels()
        );
        Self {
            width,
            height,
            format,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Raw samples in row-major order.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// True when the grid holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Byte offset of pixel `(x, y)`.
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.format.channels()
    }

    /// Samples of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = self.offset(x, y);
        self.data.get(start..start + self.format.channels())
    }

    /// First sample of the pixel at `(x, y)`.
    ///
    /// For a `Luma` grid this is the luminance itself.
    pub fn luma_at(&self, x: u32, y: u32) -> Option<u8> {
        self.get(x, y).map(|px| px[0])
    }

    /// Iterate over the rows of the grid, each as a slice of raw samples.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        let stride = (self.width as usize * self.format.channels()).max(1);
        self.data.chunks_exact(stride).take(self.height as usize)
    }
}
