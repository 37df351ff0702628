//! Error types for the rendering pipeline.

use std::path::PathBuf;

/// Errors that can occur while decoding or rendering an image.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// The source image could not be opened or decoded
    #[error("Unable to open image file {}.", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Requested width is not positive, or the source image has no width
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    /// Mode string is neither "ascii" nor "braille"
    #[error("Unknown mode '{0}'. Use 'ascii' or 'braille'.")]
    UnsupportedMode(String),

    /// Pixel buffer length does not match the declared geometry
    #[error("Pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

impl RenderError {
    /// Shorthand for an [`RenderError::InvalidDimension`] with a formatted reason.
    pub(crate) fn invalid_dimension(reason: impl Into<String>) -> Self {
        RenderError::InvalidDimension(reason.into())
    }
}
