//! The `icons` block of a browser-extension `manifest.json`.
//!
//! Chrome and Firefox both expect a map from pixel size to a path relative to
//! the extension root:
//!
//! ```json
//! { "icons": { "16": "icons/icon16.png", "128": "icons/icon128.png" } }
//! ```

use anyhow::{Context, Result};
use serde::Serialize;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

/// File written next to the icons.
pub const MANIFEST_FILE_NAME: &str = "manifest-icons.json";

/// Manifest fragment ready to paste into `manifest.json`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ManifestIcons {
    /// Pixel size to relative icon path; integer keys keep numeric order and
    /// serialize as strings.
    pub icons: BTreeMap<u32, String>,
}

impl ManifestIcons {
    /// Build the fragment for icons stored under `prefix` (the icon directory
    /// as seen from the extension root).
    pub fn from_sizes(prefix: &str, sizes: &[u32]) -> Self {
        let prefix = prefix.trim_end_matches('/');
        let icons = sizes
            .iter()
            .map(|&size| {
                let file = crate::generate::icon_file_name(size);
                let path = if prefix.is_empty() {
                    file
                } else {
                    format!("{prefix}/{file}")
                };
                (size, path)
            })
            .collect();

        Self { icons }
    }
}

/// Write `manifest-icons.json` into `out_dir`.
pub fn write_manifest_icons(out_dir: &Path, prefix: &str, sizes: &[u32]) -> Result<PathBuf> {
    let manifest = ManifestIcons::from_sizes(prefix, sizes);
    let json =
        serde_json::to_string_pretty(&manifest).context("Failed to serialize manifest icons")?;

    let path = out_dir.join(MANIFEST_FILE_NAME);
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Created {}", path.display());
    Ok(path)
}
