// SPDX-License-Identifier: MPL-2.0
//! Icon generation entry points.
//!
//! A [`Generator`] is built once per run with the chosen [`Backend`] and
//! writes each [`IconJob`] independently. [`create_icon`] is the one-shot
//! form that detects the backend itself.

use crate::backend::Backend;
use crate::config::defaults::DEFAULT_FONT_FAMILY;
use crate::error::Result;
use crate::geometry::{IconGeometry, IconSize};
use crate::svg;
use std::fmt;
use std::path::{Path, PathBuf};

#[cfg(feature = "raster")]
use crate::raster::{self, GlyphFont};

/// One icon to produce: its size and the PNG path it is meant for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconJob {
    pub size: IconSize,
    pub path: PathBuf,
}

impl IconJob {
    #[must_use]
    pub fn new(size: IconSize, path: impl Into<PathBuf>) -> Self {
        Self {
            size,
            path: path.into(),
        }
    }

    /// Jobs named `{stem}{size}.png` inside `out_dir`, in the given order.
    ///
    /// # Errors
    ///
    /// Fails on the first zero size.
    pub fn batch(out_dir: &Path, stem: &str, sizes: &[u32]) -> Result<Vec<IconJob>> {
        sizes
            .iter()
            .map(|&px| {
                let size = IconSize::new(px)?;
                Ok(IconJob::new(size, out_dir.join(format!("{stem}{px}.png"))))
            })
            .collect()
    }
}

/// Outcome of one written icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub path: PathBuf,
    pub size: IconSize,
    pub backend: Backend,
}

impl fmt::Display for GeneratedIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| self.path.to_string_lossy());
        match self.backend {
            Backend::Raster => write!(f, "Created {} ({})", name, self.size),
            Backend::Svg => write!(f, "Created {} (SVG fallback)", name),
        }
    }
}

/// Backend-specific state held for the whole run.
#[derive(Debug, Clone)]
enum Writer {
    #[cfg(feature = "raster")]
    Raster(GlyphFont),
    Svg,
}

/// Writes icons with a fixed backend and font.
#[derive(Debug, Clone)]
pub struct Generator {
    writer: Writer,
    font_family: String,
}

impl Generator {
    /// Prepares a generator. For the raster backend the system fonts are
    /// loaded once here and shared by every icon.
    ///
    /// Without the `raster` feature every backend writes SVG.
    #[must_use]
    pub fn new(backend: Backend, font_family: &str) -> Self {
        let writer = match backend {
            #[cfg(feature = "raster")]
            Backend::Raster => Writer::Raster(GlyphFont::load(font_family)),
            #[cfg(not(feature = "raster"))]
            Backend::Raster => Writer::Svg,
            Backend::Svg => Writer::Svg,
        };

        Self {
            writer,
            font_family: font_family.to_string(),
        }
    }

    /// Writes one icon and reports where it went.
    ///
    /// # Errors
    ///
    /// Any drawing, encoding or I/O failure. Missing fonts are not errors.
    pub fn create(&self, job: &IconJob) -> Result<GeneratedIcon> {
        let geometry = IconGeometry::new(job.size);
        log::debug!("{} icon geometry: {:?}", job.size, geometry);

        let (path, backend) = match &self.writer {
            #[cfg(feature = "raster")]
            Writer::Raster(font) => (
                raster::write_icon(&geometry, font, &job.path)?,
                Backend::Raster,
            ),
            Writer::Svg => (
                svg::write_icon(&geometry, &self.font_family, &job.path)?,
                Backend::Svg,
            ),
        };

        Ok(GeneratedIcon {
            path,
            size: job.size,
            backend,
        })
    }

    /// Writes every job in order, stopping at the first failure.
    ///
    /// `on_written` sees each icon as soon as it is on disk.
    pub fn create_all<F>(&self, jobs: &[IconJob], mut on_written: F) -> Result<Vec<GeneratedIcon>>
    where
        F: FnMut(&GeneratedIcon),
    {
        jobs.iter()
            .map(|job| {
                let icon = self.create(job)?;
                on_written(&icon);
                Ok(icon)
            })
            .collect()
    }
}

/// Writes one icon of `size` pixels for `filename`, a `.png` path.
///
/// Produces a PNG when the raster backend is built in, otherwise an SVG
/// next to it with the extension swapped. Returns the path written.
///
/// # Errors
///
/// A zero size, or any drawing, encoding or I/O failure.
pub fn create_icon(size: u32, filename: impl AsRef<Path>) -> Result<PathBuf> {
    let job = IconJob::new(IconSize::new(size)?, filename.as_ref());
    Generator::new(Backend::detect(), DEFAULT_FONT_FAMILY)
        .create(&job)
        .map(|icon| icon.path)
}
