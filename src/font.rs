//! The font used for the "YT" label.
//!
//! DejaVu Sans Bold is compiled into the binary, so a label font is always
//! available. `--font` and `$YT_ICONS_FONT` override it; an override that
//! cannot be loaded is logged and the embedded font is used instead.

use anyhow::{Context, Result};
use rusttype::Font;
use std::path::{Path, PathBuf};

/// Environment variable naming a font file to use for the label.
pub const FONT_ENV_VAR: &str = "YT_ICONS_FONT";

const EMBEDDED_FONT: &[u8] = include_bytes!("fonts/DejaVuSans-Bold.ttf");

/// Read and parse a font file.
pub fn load_font(path: &Path) -> Result<Font<'static>> {
    let data = std::fs::read(path)
        .with_context(|| format!("Failed to read font file {}", path.display()))?;
    Font::try_from_vec(data)
        .with_context(|| format!("{} is not a usable TrueType/OpenType font", path.display()))
}

/// The font shipped inside the binary.
pub fn embedded_font() -> Result<Font<'static>> {
    Font::try_from_bytes(EMBEDDED_FONT).context("Failed to parse embedded DejaVu Sans Bold")
}

/// Pick the label font: the explicit path if given, else `$YT_ICONS_FONT`,
/// else the embedded font.
///
/// `None` only if the embedded font itself is unusable; icons are then
/// rendered without text.
pub fn resolve_font(explicit: Option<&Path>) -> Option<Font<'static>> {
    if let Some(path) = override_path(explicit) {
        match load_font(&path) {
            Ok(font) => {
                log::debug!("Using label font {}", path.display());
                return Some(font);
            }
            Err(err) => log::warn!("{err:#}; falling back to the embedded font"),
        }
    }

    match embedded_font() {
        Ok(font) => Some(font),
        Err(err) => {
            log::debug!("{err:#}");
            None
        }
    }
}

fn override_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(FONT_ENV_VAR).map(PathBuf::from))
}
