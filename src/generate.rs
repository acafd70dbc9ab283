use crate::{font, manifest, render};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Icon sizes required by the extension manifest, smallest first.
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

pub const DEFAULT_OUTPUT_DIR: &str = "icons";

#[derive(Debug, Clone)]
pub struct Options {
    pub output: PathBuf,
    pub font: Option<PathBuf>,
    pub manifest: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            font: None,
            manifest: false,
        }
    }
}

pub fn icon_file_name(size: u32) -> String {
    format!("icon{size}.png")
}

pub fn icon_path(out_dir: &Path, size: u32) -> PathBuf {
    out_dir.join(icon_file_name(size))
}

/// Write every icon in `ICON_SIZES` into the output directory and return
/// their paths. The first failure aborts the run.
pub fn generate_icons(options: &Options) -> Result<Vec<PathBuf>> {
    // Ensure the output directory exists
    std::fs::create_dir_all(&options.output).with_context(|| {
        format!(
            "Can't create output directory {}",
            options.output.display()
        )
    })?;

    let label_font = font::resolve_font(options.font.as_deref());
    if label_font.is_none() {
        log::warn!("Embedded font unusable, icons will be rendered without the label");
    }

    let mut written = Vec::with_capacity(ICON_SIZES.len());
    for size in ICON_SIZES {
        let path = icon_path(&options.output, size);
        render::create_icon(size, &path, label_font.as_ref())?;
        written.push(path);
    }

    if options.manifest {
        manifest::write_manifest_icons(
            &options.output,
            &manifest_prefix(&options.output),
            &ICON_SIZES,
        )?;
    }

    println!("All icons created successfully!");
    Ok(written)
}

/// Icon directory as referenced from `manifest.json`, which lives in the
/// directory's parent.
fn manifest_prefix(out_dir: &Path) -> String {
    out_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
