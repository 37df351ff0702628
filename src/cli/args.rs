//! CLI argument parsing with clap.

use clap::Parser;
use std::path::PathBuf;

/// Render an image as ASCII or braille art in the terminal
#[derive(Parser, Debug)]
#[command(name = "ascii-generator")]
#[command(version, about = "Convert images to ASCII or braille text art", long_about = None)]
pub struct Args {
    /// Image file to render
    pub image: PathBuf,

    /// Output width in characters (braille: cells per line) [default: 100]
    #[arg(allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Output mode: ascii or braille [default: ascii]
    pub mode: Option<String>,

    /// Braille dot threshold; darker samples raise a dot [default: 128]
    #[arg(long, short, allow_negative_numbers = true)]
    pub threshold: Option<i32>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}
