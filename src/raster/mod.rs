// SPDX-License-Identifier: MPL-2.0
//! Raster (PNG) icon output.
//!
//! Shapes are drawn straight onto a `tiny_skia` canvas. The two glyphs go
//! through a small SVG text overlay rendered by `resvg`, which handles font
//! fallback for the CJK character. The canvas is encoded with the `image`
//! crate.

pub mod font;

pub use font::GlyphFont;

use crate::error::{Error, Result};
use crate::geometry::{IconGeometry, Point, OUTER_INSET};
use image_rs::{ImageFormat, RgbaImage};
use quick_xml::escape::escape;
use resvg::usvg;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tiny_skia::{FillRule, Paint, Path as SkPath, PathBuilder, Pixmap, Stroke, Transform};

/// Fill of the background disc.
pub const DISC_COLOR: [u8; 4] = [102, 126, 234, 255];

/// Outline, ring, cross and glyph color.
pub const FOREGROUND: [u8; 4] = [255, 255, 255, 255];

/// Draws one icon on a fresh transparent canvas.
pub fn render(geometry: &IconGeometry, font: &GlyphFont) -> Result<Pixmap> {
    let size = geometry.size;
    let mut pixmap = Pixmap::new(size, size)
        .ok_or_else(|| Error::Png(format!("cannot allocate a {size}x{size} canvas")))?;

    let c = geometry.center as f32;

    // Background disc with its outline kept inside the disc edge.
    let (disc_c, disc_r) = box_circle(OUTER_INSET, i64::from(size) - OUTER_INSET);
    if let Some(disc) = PathBuilder::from_circle(disc_c, disc_c, disc_r) {
        pixmap.fill_path(&disc, &paint(DISC_COLOR), FillRule::Winding, Transform::identity(), None);
    }
    stroke_circle(&mut pixmap, disc_c, disc_r, geometry.outer_stroke);

    let (ring_c, ring_r) = box_circle(
        geometry.center - geometry.inner_radius,
        geometry.center + geometry.inner_radius,
    );
    stroke_circle(&mut pixmap, ring_c, ring_r, geometry.ring_width);

    let offset = pixel_offset(geometry.line_width);
    let (start, end) = (geometry.cross_start as f32, geometry.cross_end as f32);
    stroke_line(&mut pixmap, (start, c + offset), (end, c + offset), geometry.line_width);
    stroke_line(&mut pixmap, (c + offset, start), (c + offset, end), geometry.line_width);

    if let Some(family) = font.family() {
        draw_glyphs(&mut pixmap, geometry, font, family)?;
    }

    Ok(pixmap)
}

/// Encodes a canvas as an RGBA PNG with straight alpha.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>> {
    let rgba: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let c = pixel.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    let image = RgbaImage::from_raw(pixmap.width(), pixmap.height(), rgba)
        .ok_or_else(|| Error::Png("pixel buffer does not match canvas size".into()))?;

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Renders and writes a PNG icon to `path`.
///
/// Returns the path written.
pub fn write_icon(geometry: &IconGeometry, font: &GlyphFont, path: &Path) -> Result<PathBuf> {
    let pixmap = render(geometry, font)?;
    let bytes = encode_png(&pixmap)?;
    fs::write(path, bytes)?;
    log::info!("wrote {}", path.display());
    Ok(path.to_path_buf())
}

fn paint(rgba: [u8; 4]) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(rgba[0], rgba[1], rgba[2], rgba[3]);
    paint.anti_alias = true;
    paint
}

/// Circle filling the pixel box `[lo, hi]` on both axes, both ends
/// included, as a bounding-box ellipse is drawn.
fn box_circle(lo: i64, hi: i64) -> (f32, f32) {
    let center = (lo + hi + 1) as f32 / 2.0;
    let radius = (hi + 1 - lo) as f32 / 2.0;
    (center, radius)
}

/// Centers odd-width strokes on a pixel row or column.
fn pixel_offset(width: u32) -> f32 {
    if width % 2 == 1 {
        0.5
    } else {
        0.0
    }
}

/// Strokes a circle whose band lies inside `radius`, like an outlined
/// ellipse bounded by its box.
fn stroke_circle(pixmap: &mut Pixmap, center: f32, radius: f32, width: u32) {
    let width = width as f32;
    if let Some(path) = PathBuilder::from_circle(center, center, radius - width / 2.0) {
        stroke(pixmap, &path, width);
    }
}

fn stroke_line(pixmap: &mut Pixmap, from: (f32, f32), to: (f32, f32), width: u32) {
    let mut builder = PathBuilder::new();
    builder.move_to(from.0, from.1);
    builder.line_to(to.0, to.1);
    if let Some(path) = builder.finish() {
        stroke(pixmap, &path, width as f32);
    }
}

fn stroke(pixmap: &mut Pixmap, path: &SkPath, width: f32) {
    let stroke = Stroke {
        width,
        ..Stroke::default()
    };
    pixmap.stroke_path(path, &paint(FOREGROUND), &stroke, Transform::identity(), None);
}

fn draw_glyphs(
    pixmap: &mut Pixmap,
    geometry: &IconGeometry,
    font: &GlyphFont,
    family: &str,
) -> Result<()> {
    draw_glyph(pixmap, geometry, font, family, geometry.latin_anchor, "A")?;
    draw_glyph(pixmap, geometry, font, family, geometry.cjk_anchor, "中")
}

/// Draws one glyph centered on `anchor`. Characters missing from `family`
/// are looked up in the rest of the font database.
fn draw_glyph(
    pixmap: &mut Pixmap,
    geometry: &IconGeometry,
    font: &GlyphFont,
    family: &str,
    anchor: Point,
    glyph: &str,
) -> Result<()> {
    let overlay = glyph_overlay(geometry, family, anchor, glyph);

    let mut options = usvg::Options::default();
    options.fontdb = font.database();
    options.font_family = family.to_string();

    let tree = usvg::Tree::from_str(&overlay, &options).map_err(|e| Error::Svg(e.to_string()))?;
    resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
    Ok(())
}

/// SVG holding a single white glyph centered on its anchor.
fn glyph_overlay(geometry: &IconGeometry, family: &str, anchor: Point, glyph: &str) -> String {
    let size = geometry.size;
    let family = escape(family);
    let glyph = escape(glyph);
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}"><text x="{}" y="{}" font-family="'{family}'" font-size="{}" fill="#fff" text-anchor="middle" dominant-baseline="central">{glyph}</text></svg>"##,
        anchor.x, anchor.y, geometry.font_size,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::IconSize;
    use resvg::usvg::fontdb::Database;

    fn geometry(px: u32) -> IconGeometry {
        IconGeometry::new(IconSize::new(px).expect("non-zero size"))
    }

    fn no_fonts() -> GlyphFont {
        GlyphFont::from_database(Database::new(), "Arial")
    }

    fn rgba_at(pixmap: &Pixmap, x: u32, y: u32) -> [u8; 4] {
        let c = pixmap.pixel(x, y).expect("pixel in bounds").demultiply();
        [c.red(), c.green(), c.blue(), c.alpha()]
    }

    #[test]
    fn canvas_matches_requested_size() {
        for px in [16, 48, 128] {
            let pixmap = render(&geometry(px), &no_fonts()).expect("render");
            assert_eq!((pixmap.width(), pixmap.height()), (px, px));
        }
    }

    #[test]
    fn corners_stay_transparent() {
        for px in [16, 48, 128] {
            let pixmap = render(&geometry(px), &no_fonts()).expect("render");
            let last = px - 1;
            for (x, y) in [(0, 0), (last, 0), (0, last), (last, last)] {
                assert_eq!(rgba_at(&pixmap, x, y)[3], 0, "corner ({x},{y}) of {px}px icon");
            }
        }
    }

    #[test]
    fn disc_interior_uses_the_fill_color() {
        let pixmap = render(&geometry(128), &no_fonts()).expect("render");
        // Between the inner ring and the outer outline, off both cross lines.
        assert_eq!(rgba_at(&pixmap, 101, 101), DISC_COLOR);
    }

    #[test]
    fn disc_covers_its_whole_bounding_box() {
        for px in [16u32, 48, 128] {
            let g = geometry(px);
            let pixmap = render(&g, &no_fonts()).expect("render");
            let c = g.center as u32;
            let (lo, hi) = (2, px - 2);
            for (x, y) in [(lo, c), (hi, c), (c, lo), (c, hi)] {
                let alpha = rgba_at(&pixmap, x, y)[3];
                assert!(alpha > 127, "edge ({x},{y}) of {px}px icon has alpha {alpha}");
            }
        }
    }

    #[test]
    fn box_circle_spans_inclusive_pixels() {
        assert_eq!(box_circle(2, 14), (8.5, 6.5));
        assert_eq!(box_circle(64 - 42, 64 + 42), (64.5, 42.5));
    }

    #[test]
    fn cross_center_is_white() {
        let pixmap = render(&geometry(128), &no_fonts()).expect("render");
        assert_eq!(rgba_at(&pixmap, 64, 64), FOREGROUND);
    }

    #[test]
    fn encoded_png_decodes_with_alpha() {
        let pixmap = render(&geometry(48), &no_fonts()).expect("render");
        let bytes = encode_png(&pixmap).expect("encode");
        let decoded = image_rs::load_from_memory_with_format(&bytes, ImageFormat::Png)
            .expect("valid png");
        assert_eq!((decoded.width(), decoded.height()), (48, 48));
        assert!(decoded.color().has_alpha());
    }

    #[test]
    fn rendering_is_deterministic() {
        let font = no_fonts();
        let first = encode_png(&render(&geometry(128), &font).expect("render")).expect("encode");
        let second = encode_png(&render(&geometry(128), &font).expect("render")).expect("encode");
        assert_eq!(first, second);
    }

    #[test]
    fn glyph_overlay_is_valid_svg() {
        let g = geometry(48);
        for (anchor, glyph) in [(g.latin_anchor, "A"), (g.cjk_anchor, "中")] {
            let overlay = glyph_overlay(&g, "Noto Sans", anchor, glyph);
            let tree = usvg::Tree::from_str(&overlay, &usvg::Options::default());
            assert!(tree.is_ok());
            assert!(overlay.contains(&format!(">{glyph}</text>")));
            assert!(overlay.contains(&format!(r#"x="{}" y="{}""#, anchor.x, anchor.y)));
            assert!(overlay.contains(r#"font-size="8""#));
        }
    }

    #[test]
    fn glyphs_render_with_installed_fonts() {
        let font = GlyphFont::load("Arial");
        if font.family().is_none() {
            return;
        }
        let g = geometry(128);
        let with_glyphs = render(&g, &font).expect("render");
        let without = render(&g, &no_fonts()).expect("render");
        assert_ne!(with_glyphs.data(), without.data());
    }

    /// Alpha inside and outside a square of half-side `reach` around `anchor`.
    fn ink_around(pixmap: &Pixmap, anchor: Point, reach: i64) -> (u32, u32) {
        let (mut near, mut far) = (0, 0);
        for y in 0..pixmap.height() {
            for x in 0..pixmap.width() {
                let alpha = u32::from(rgba_at(pixmap, x, y)[3]);
                if (i64::from(x) - anchor.x).abs() <= reach && (i64::from(y) - anchor.y).abs() <= reach {
                    near += alpha;
                } else {
                    far += alpha;
                }
            }
        }
        (near, far)
    }

    #[test]
    fn each_glyph_inks_only_around_its_anchor() {
        // An empty database means no glyphs at all; any installed face draws
        // "中", either from a CJK font found by fallback or as a missing-glyph box.
        let font = GlyphFont::load("Arial");
        let Some(family) = font.family() else {
            return;
        };
        let g = geometry(128);
        let reach = i64::from(g.font_size);
        for (anchor, glyph) in [(g.cjk_anchor, "中"), (g.latin_anchor, "A")] {
            let mut pixmap = Pixmap::new(g.size, g.size).expect("canvas");
            draw_glyph(&mut pixmap, &g, &font, family, anchor, glyph).expect("draw");
            let (near, far) = ink_around(&pixmap, anchor, reach);
            assert!(near > 0, "{glyph} left no ink near ({}, {})", anchor.x, anchor.y);
            assert_eq!(far, 0, "{glyph} inked pixels away from its anchor");
        }
    }
}
