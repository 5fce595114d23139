// SPDX-License-Identifier: MPL-2.0
//! Output backend selection.
//!
//! The raster backend exists only when the crate is built with the `raster`
//! feature. The choice is made once at startup and handed to the generator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How icons are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// PNG drawn on an RGBA canvas.
    Raster,
    /// SVG document built from a text template.
    Svg,
}

/// Backend requested by the user through config or flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    /// Raster when compiled in, SVG otherwise.
    #[default]
    Auto,
    Raster,
    Svg,
}

impl Backend {
    /// Whether the imaging backend was compiled into this build.
    #[must_use]
    pub const fn raster_available() -> bool {
        cfg!(feature = "raster")
    }

    /// Best backend available in this build.
    #[must_use]
    pub fn detect() -> Self {
        Self::select(BackendPreference::Auto)
    }

    /// Resolves a preference against what this build can do.
    ///
    /// Asking for raster in a build without it degrades to SVG.
    #[must_use]
    pub fn select(preference: BackendPreference) -> Self {
        match preference {
            BackendPreference::Svg => Backend::Svg,
            BackendPreference::Auto | BackendPreference::Raster => {
                if Self::raster_available() {
                    Backend::Raster
                } else {
                    if preference == BackendPreference::Raster {
                        log::warn!("raster backend requested but not compiled in, using SVG");
                    }
                    Backend::Svg
                }
            }
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Raster => write!(f, "raster"),
            Backend::Svg => write!(f, "svg"),
        }
    }
}
