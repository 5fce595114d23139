// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the icon run.
//!
//! Everything here is what a run with no config file and no flags uses.

// ==========================================================================
// Output Defaults
// ==========================================================================

/// Icon sides written by a default run, in order.
pub const DEFAULT_SIZES: &[u32] = &[16, 48, 128];

/// File name prefix; each file is `{stem}{size}.png`.
pub const DEFAULT_FILE_STEM: &str = "icon";

/// Directory the icons are written to.
pub const DEFAULT_OUT_DIR: &str = ".";

// ==========================================================================
// Glyph Defaults
// ==========================================================================

/// Font family tried first for the "A" and "中" glyphs.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
