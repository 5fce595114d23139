// SPDX-License-Identifier: MPL-2.0
//! SVG fallback output.
//!
//! Used when the raster backend is not available. The document is a fixed
//! template filled in from [`IconGeometry`], so it approximates the PNG
//! without needing any drawing library.

use crate::error::Result;
use crate::geometry::IconGeometry;
use quick_xml::escape::escape;
use std::fs;
use std::path::{Path, PathBuf};

/// Gradient stops of the background disc.
pub const GRADIENT_START: &str = "#667eea";
pub const GRADIENT_END: &str = "#764ba2";

/// Builds the SVG document for one icon.
///
/// `font_family` is listed before the generic `sans-serif` fallback.
#[must_use]
pub fn render(geometry: &IconGeometry, font_family: &str) -> String {
    let size = geometry.size;
    let c = geometry.center;
    let family = escape(font_family);

    format!(
        r##"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}" xmlns="http://www.w3.org/2000/svg">
    <defs>
        <linearGradient id="grad" x1="0%" y1="0%" x2="100%" y2="100%">
            <stop offset="0%" style="stop-color:{GRADIENT_START};stop-opacity:1" />
            <stop offset="100%" style="stop-color:{GRADIENT_END};stop-opacity:1" />
        </linearGradient>
    </defs>
    <circle cx="{c}" cy="{c}" r="{outer_r}" fill="url(#grad)" stroke="#fff" stroke-width="{outer_w}"/>
    <circle cx="{c}" cy="{c}" r="{inner_r}" fill="none" stroke="#fff" stroke-width="{ring_w}"/>
    <path d="M{start} {c}h{len}M{c} {start}v{len}" stroke="#fff" stroke-width="{line_w}"/>
    <text x="{ax}" y="{ay}" font-family="{family}, sans-serif" font-size="{font}" fill="#fff" text-anchor="middle">A</text>
    <text x="{bx}" y="{by}" font-family="{family}, sans-serif" font-size="{font}" fill="#fff" text-anchor="middle">中</text>
</svg>
"##,
        outer_r = geometry.outer_radius,
        outer_w = geometry.outer_stroke,
        inner_r = geometry.inner_radius,
        ring_w = geometry.ring_width,
        start = geometry.cross_start,
        len = geometry.cross_len(),
        line_w = geometry.line_width,
        ax = geometry.latin_anchor.x,
        ay = geometry.latin_anchor.y,
        bx = geometry.cjk_anchor.x,
        by = geometry.cjk_anchor.y,
        font = geometry.svg_font_size,
    )
}

/// Maps a requested `.png` path to the `.svg` path actually written.
///
/// Names without a `.png` extension get `.svg` appended instead, so the
/// fallback never overwrites a file of another type.
#[must_use]
pub fn svg_path_for(path: &Path) -> PathBuf {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));

    if is_png {
        path.with_extension("svg")
    } else {
        let mut name = path.as_os_str().to_owned();
        name.push(".svg");
        PathBuf::from(name)
    }
}

/// Writes the fallback icon next to where the PNG would have gone.
///
/// Returns the path written.
pub fn write_icon(geometry: &IconGeometry, font_family: &str, png_path: &Path) -> Result<PathBuf> {
    let target = svg_path_for(png_path);
    fs::write(&target, render(geometry, font_family))?;
    log::info!("wrote {}", target.display());
    Ok(target)
}
