//! Turns parsed arguments into a render request and runs it.

use super::args::Args;
use crate::ascii::{self, Mode, RenderMode};
use crate::config::{Config, ConfigError};
use crate::decode::decode;
use crate::error::RenderError;

/// Anything that can stop a CLI invocation.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Load the config file named by `--config`, or the default one.
///
/// An explicit path must exist and parse. A broken default config only
/// produces a warning and falls back to built-in defaults.
pub fn load_config(args: &Args) -> Result<Config, ConfigError> {
    match args.config {
        Some(ref path) => Config::load_from(path),
        None => match Config::load() {
            Ok(c) => Ok(c),
            Err(e) => {
                let cause = std::error::Error::source(&e)
                    .map(|c| c.to_string())
                    .unwrap_or_default();
                log::warn!("{}: {}; using default settings", e, cause);
                eprintln!("Warning: {}: {}", e, cause);
                eprintln!("Using default settings.\n");
                Ok(Config::default())
            }
        },
    }
}

/// Merge settings: CLI args > config file > built-in defaults.
pub fn resolve_render_mode(args: &Args, cfg: &Config) -> Result<RenderMode, RenderError> {
    let mode: Mode = match args.mode.as_deref().or(cfg.render.mode.as_deref()) {
        Some(name) => name.parse()?,
        None => Mode::default(),
    };

    let width = args.width.unwrap_or(cfg.render.width);
    let width = u32::try_from(width)
        .ok()
        .filter(|w| *w > 0)
        .ok_or_else(|| {
            RenderError::InvalidDimension(format!("width must be greater than 0, got {}", width))
        })?;

    let threshold = args.threshold.unwrap_or(cfg.render.threshold);

    Ok(RenderMode::from_mode(mode, width, Some(threshold)))
}

/// Run one invocation and return the rendered text.
///
/// The mode is resolved before the image is decoded, so an unknown mode is
/// reported without touching the file.
pub fn run(args: &Args) -> Result<String, CliError> {
    let cfg = load_config(args)?;
    let render_mode = resolve_render_mode(args, &cfg)?;
    let grid = decode(&args.image)?;
    Ok(ascii::render(&grid, &render_mode)?)
}
