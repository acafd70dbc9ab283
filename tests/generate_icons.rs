use image::{ColorType, GenericImageView};
use std::path::PathBuf;
use tempfile::TempDir;
use yt_block_icons::{font, generate_icons, render, Options, ICON_SIZES};

/// Options writing into a fresh temp dir, with a broken font override so the
/// embedded font is used for the label.
fn options_with_broken_font(temp_dir: &TempDir) -> Options {
    let broken_font = temp_dir.path().join("broken.ttf");
    std::fs::write(&broken_font, b"not a font").expect("Failed to write broken font");

    Options {
        output: temp_dir.path().join("nested").join("icons"),
        font: Some(broken_font),
        manifest: false,
    }
}

#[test]
fn test_generates_every_size_into_missing_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let options = options_with_broken_font(&temp_dir);
    assert!(!options.output.exists());

    let written = generate_icons(&options).expect("Icon generation should succeed");

    let expected: Vec<PathBuf> = ICON_SIZES
        .iter()
        .map(|size| options.output.join(format!("icon{size}.png")))
        .collect();
    assert_eq!(written, expected);

    for (size, path) in ICON_SIZES.iter().zip(&written) {
        assert!(path.exists(), "{} should exist", path.display());

        let icon = image::open(path).expect("Failed to load generated icon");
        assert_eq!(icon.dimensions(), (*size, *size));
        assert_eq!(icon.color(), ColorType::Rgba8, "{} should be RGBA", path.display());
    }

    // No manifest unless asked for
    assert!(!options.output.join("manifest-icons.json").exists());
}

#[test]
fn test_broken_font_override_falls_back_to_embedded_label() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let options = options_with_broken_font(&temp_dir);

    generate_icons(&options).expect("A broken font must not fail the run");

    let embedded = font::embedded_font().expect("Embedded font should parse");
    for size in ICON_SIZES {
        let on_disk = image::open(options.output.join(format!("icon{size}.png")))
            .expect("Failed to load generated icon")
            .to_rgba8();
        assert_eq!(on_disk, render::render_icon(size, Some(&embedded)));
        if size >= 32 {
            assert_ne!(on_disk, render::render_icon(size, None), "{size}px icon lacks the label");
        }
    }
}

#[test]
fn test_rerun_is_byte_identical() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let options = options_with_broken_font(&temp_dir);
    let path = options.output.join("icon128.png");

    generate_icons(&options).unwrap();
    let first = std::fs::read(&path).unwrap();

    generate_icons(&options).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_manifest_written_on_request() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let options = Options {
        manifest: true,
        ..options_with_broken_font(&temp_dir)
    };

    generate_icons(&options).unwrap();

    let manifest = std::fs::read_to_string(options.output.join("manifest-icons.json"))
        .expect("manifest-icons.json should exist");
    let parsed: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    for size in ICON_SIZES {
        assert_eq!(
            parsed["icons"][size.to_string()],
            format!("icons/icon{size}.png")
        );
    }
}

#[test]
fn test_unwritable_output_is_an_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    // A regular file where the directory should go
    let blocker = temp_dir.path().join("icons");
    std::fs::write(&blocker, b"").unwrap();

    let err = generate_icons(&Options {
        output: blocker,
        ..Options::default()
    })
    .unwrap_err();
    assert!(err.to_string().contains("Can't create output directory"));
}
