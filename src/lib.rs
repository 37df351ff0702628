//! ascii-generator library crate.
//!
//! Converts decoded images into ASCII or braille text art. The binary wraps
//! this with argument parsing and image loading; everything here is also
//! usable directly on an in-memory [`ascii::PixelGrid`].

pub mod ascii;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;

pub use ascii::{render, render_ascii, render_braille, Mode, PixelFormat, PixelGrid, RenderMode};
pub use decode::decode;
pub use error::RenderError;
