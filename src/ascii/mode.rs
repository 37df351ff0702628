//! Render mode selection and the single render entry point.

use std::fmt;
use std::str::FromStr;

use super::braille::{render_braille, DEFAULT_THRESHOLD};
use super::grid::PixelGrid;
use super::mapping::render_ascii;
use crate::error::RenderError;

/// Output style requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// 10-level character ramp
    #[default]
    Ascii,
    /// 8-dot braille cells
    Braille,
}

impl Mode {
    /// Get a human-readable name for the mode.
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Ascii => "ascii",
            Mode::Braille => "braille",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mode {
    type Err = RenderError;

    /// Parse a mode name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ascii" => Ok(Mode::Ascii),
            "braille" => Ok(Mode::Braille),
            _ => Err(RenderError::UnsupportedMode(s.to_string())),
        }
    }
}

/// A fully parameterized render request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// ASCII art `width` characters wide
    Ascii { width: u32 },
    /// Braille art `width` cells wide, raising dots below `threshold`
    Braille { width: u32, threshold: i32 },
}

impl RenderMode {
    /// Build a render request from a mode and its parameters.
    ///
    /// `threshold` only applies to braille and falls back to
    /// [`DEFAULT_THRESHOLD`] when not given.
    pub fn from_mode(mode: Mode, width: u32, threshold: Option<i32>) -> Self {
        match mode {
            Mode::Ascii => RenderMode::Ascii { width },
            Mode::Braille => RenderMode::Braille {
                width,
                threshold: threshold.unwrap_or(DEFAULT_THRESHOLD),
            },
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            RenderMode::Ascii { .. } => Mode::Ascii,
            RenderMode::Braille { .. } => Mode::Braille,
        }
    }
}

/// Render a decoded image according to `mode`.
///
/// This is the only place that branches on the output style; both pipelines
/// share the resize and grayscale stages.
pub fn render(grid: &PixelGrid, mode: &RenderMode) -> Result<String, RenderError> {
    log::debug!(
        "Rendering {}x{} image as {:?}",
        grid.width(),
        grid.height(),
        mode
    );

    match *mode {
        RenderMode::Ascii { width } => render_ascii(grid, width),
        RenderMode::Braille { width, threshold } => render_braille(grid, width, threshold),
    }
}
