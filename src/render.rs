//! Rasterization of the prohibition-sign icon.
//!
//! Everything is drawn with plain per-pixel loops on an `RgbaImage`; shapes are
//! hard-edged and only the text label is anti-aliased.

use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageBuffer, ImageEncoder, Rgba, RgbaImage,
};
use rusttype::{point, Font, Rect, Scale};
use std::{io::Write, path::Path};

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);
pub const BACKGROUND_BLUE: Rgba<u8> = Rgba([102, 126, 234, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const PROHIBITION_RED: Rgba<u8> = Rgba([255, 68, 68, 255]);

/// Text drawn over the sign.
pub const LABEL: &str = "YT";

/// Smallest icon that gets the label; below this it is unreadable.
pub const MIN_LABEL_SIZE: u32 = 32;

/// Pixel measurements of an icon, all derived from its side length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub center: u32,
    pub circle_radius: u32,
    pub outline_width: u32,
    pub ring_radius: u32,
    pub stroke_width: u32,
    pub line_start: u32,
    pub line_end: u32,
    pub label_scale: f32,
}

impl Geometry {
    pub fn for_size(size: u32) -> Self {
        let stroke_width = (size / 16).max(2);
        Self {
            center: size / 2,
            circle_radius: fraction_of(size, 0.45),
            outline_width: (size / 32).max(1),
            ring_radius: fraction_of(size, 0.35),
            stroke_width,
            line_start: fraction_of(size, 0.25),
            line_end: fraction_of(size, 0.75),
            label_scale: (size / 6).max(8) as f32,
        }
    }
}

fn fraction_of(size: u32, fraction: f64) -> u32 {
    (size as f64 * fraction) as u32
}

/// Render the icon at `size` x `size`.
///
/// The label is only attempted when `size >= MIN_LABEL_SIZE` and a font is
/// given. It is decoration: if it cannot be laid out the icon is returned
/// without it.
pub fn render_icon(size: u32, font: Option<&Font<'_>>) -> RgbaImage {
    let geometry = Geometry::for_size(size);
    let mut canvas = ImageBuffer::from_pixel(size, size, TRANSPARENT);

    draw_circle(
        &mut canvas,
        geometry.center,
        geometry.circle_radius,
        Some(BACKGROUND_BLUE),
        WHITE,
        geometry.outline_width,
    );

    // Prohibition sign: hollow ring plus the diagonal bar
    draw_circle(
        &mut canvas,
        geometry.center,
        geometry.ring_radius,
        None,
        PROHIBITION_RED,
        geometry.stroke_width,
    );
    draw_line(
        &mut canvas,
        (geometry.line_start, geometry.line_start),
        (geometry.line_end, geometry.line_end),
        PROHIBITION_RED,
        geometry.stroke_width,
    );

    if size >= MIN_LABEL_SIZE {
        match font {
            Some(font) => {
                if !draw_label(&mut canvas, font, LABEL, geometry.label_scale, geometry.center) {
                    log::debug!("Skipping label for {size}x{size}: font produced no glyph outlines");
                }
            }
            None => log::debug!("Skipping label for {size}x{size}: no font available"),
        }
    }

    canvas
}

/// Draw a circle whose outline band of `width` pixels lies inside `radius`.
/// With `fill` set the interior is painted as well.
fn draw_circle(
    canvas: &mut RgbaImage,
    center: u32,
    radius: u32,
    fill: Option<Rgba<u8>>,
    outline: Rgba<u8>,
    width: u32,
) {
    let (x_range, y_range) = clipped_square(canvas, center, radius);
    let outer = radius as f64;
    let inner = outer - width as f64;

    for y in y_range {
        for x in x_range.clone() {
            let dx = x as f64 - center as f64;
            let dy = y as f64 - center as f64;
            let distance = (dx * dx + dy * dy).sqrt();

            if distance > outer {
                continue;
            }
            if distance > inner {
                canvas.put_pixel(x, y, outline);
            } else if let Some(fill) = fill {
                canvas.put_pixel(x, y, fill);
            }
        }
    }
}

/// Draw a straight line of `width` pixels with flat ends.
fn draw_line(
    canvas: &mut RgbaImage,
    from: (u32, u32),
    to: (u32, u32),
    color: Rgba<u8>,
    width: u32,
) {
    let (x0, y0) = (from.0 as f64, from.1 as f64);
    let (x1, y1) = (to.0 as f64, to.1 as f64);
    let (dx, dy) = (x1 - x0, y1 - y0);
    let length_sq = dx * dx + dy * dy;
    if length_sq == 0.0 {
        return;
    }
    let half_width = width as f64 / 2.0;

    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let (px, py) = (x as f64 - x0, y as f64 - y0);
            let t = (px * dx + py * dy) / length_sq;
            if !(0.0..=1.0).contains(&t) {
                continue;
            }
            let distance = (px * dy - py * dx).abs() / length_sq.sqrt();
            if distance <= half_width {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Pixel ranges covering the bounding square of a circle, clipped to the canvas.
fn clipped_square(
    canvas: &RgbaImage,
    center: u32,
    radius: u32,
) -> (std::ops::Range<u32>, std::ops::Range<u32>) {
    let low = center.saturating_sub(radius);
    let high_x = (center + radius + 1).min(canvas.width());
    let high_y = (center + radius + 1).min(canvas.height());
    (low..high_x.max(low), low..high_y.max(low))
}

/// Blend `text` in white, centered on (`center`, `center`) by its pixel
/// bounding box. Returns false when nothing could be drawn.
fn draw_label(canvas: &mut RgbaImage, font: &Font<'_>, text: &str, scale: f32, center: u32) -> bool {
    let scale = Scale::uniform(scale);
    let ascent = font.v_metrics(scale).ascent;
    let glyphs: Vec<_> = font.layout(text, scale, point(0.0, ascent)).collect();

    let Some(bounds) = glyphs
        .iter()
        .filter_map(|glyph| glyph.pixel_bounding_box())
        .reduce(union)
    else {
        return false;
    };

    let offset_x = center as i32 - bounds.width() / 2 - bounds.min.x;
    let offset_y = center as i32 - bounds.height() / 2 - bounds.min.y;
    let (width, height) = (canvas.width() as i32, canvas.height() as i32);

    for glyph in &glyphs {
        let Some(bb) = glyph.pixel_bounding_box() else {
            continue;
        };
        glyph.draw(|gx, gy, coverage| {
            let x = offset_x + bb.min.x + gx as i32;
            let y = offset_y + bb.min.y + gy as i32;
            if x < 0 || y < 0 || x >= width || y >= height {
                return;
            }
            let pixel = canvas.get_pixel_mut(x as u32, y as u32);
            blend_over(pixel, WHITE, coverage);
        });
    }

    true
}

fn union(a: Rect<i32>, b: Rect<i32>) -> Rect<i32> {
    Rect {
        min: point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
        max: point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
    }
}

/// Source-over compositing of `color` at `coverage` onto `pixel`.
fn blend_over(pixel: &mut Rgba<u8>, color: Rgba<u8>, coverage: f32) {
    let coverage = coverage.clamp(0.0, 1.0);
    if coverage == 0.0 {
        return;
    }
    for channel in 0..4 {
        let src = color[channel] as f32;
        let dst = pixel[channel] as f32;
        pixel[channel] = (src * coverage + dst * (1.0 - coverage)).round() as u8;
    }
}

/// Encode an RGBA image as PNG. Output is a pure function of the pixels.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_png(image.as_raw(), &mut buf, image.width(), image.height())?;
    Ok(buf)
}

fn write_png<W: Write>(image_data: &[u8], w: W, width: u32, height: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, width, height, ColorType::Rgba8)?;
    Ok(())
}

/// Render one icon and write it to `path` as PNG.
pub fn create_icon(size: u32, path: &Path, font: Option<&Font<'_>>) -> Result<()> {
    let icon = render_icon(size, font);
    let png = encode_png(&icon)
        .with_context(|| format!("Failed to encode {size}x{size} icon"))?;
    log::debug!("Encoded {size}x{size} icon into {} bytes", png.len());

    std::fs::write(path, &png)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Created {} ({size}x{size})", path.display());
    Ok(())
}
