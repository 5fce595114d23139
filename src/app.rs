// SPDX-License-Identifier: MPL-2.0
//! Run orchestration between the flags, the config file and the generator.
//!
//! Icons are written one after another; the first failure ends the run.
use crate::backend::Backend;
use crate::cli::Flags;
use crate::config::{self, Config};
use crate::error::Result;
use crate::generator::{GeneratedIcon, Generator, IconJob};
use std::fs;

/// Loads the config (if any), applies the flags and writes every icon.
///
/// Progress lines go to stdout. Returns what was written, in order.
pub fn run(flags: &Flags) -> Result<Vec<GeneratedIcon>> {
    let mut config = match &flags.config {
        Some(path) => config::load_from_path(path)?,
        None => Config::default(),
    };
    flags.apply(&mut config);

    let out_dir = config.out_dir();
    fs::create_dir_all(&out_dir)?;
    let jobs = IconJob::batch(&out_dir, config.file_stem(), config.sizes())?;

    let backend = Backend::select(config.backend());
    log::debug!("backend {backend}, {} icons into {}", jobs.len(), out_dir.display());

    println!("Generating TranslateMe extension icons...");
    if !Backend::raster_available() {
        log::warn!("raster backend not compiled in");
        println!("PNG output is not available in this build; writing SVG icons instead.");
    }

    let generator = Generator::new(backend, config.font_family());
    let written = generator.create_all(&jobs, |icon| println!("{icon}"))?;

    println!();
    println!("Icons generated successfully!");
    if !Backend::raster_available() {
        println!("If you got SVG files instead of PNG, rebuild with the `raster` feature enabled.");
        println!("Then run this tool again to get PNG files.");
    }

    Ok(written)
}
