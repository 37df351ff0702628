//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing and the invocation handler.

mod args;
mod commands;

pub use args::Args;
pub use commands::{load_config, resolve_render_mode, run, CliError};
