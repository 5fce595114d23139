// SPDX-License-Identifier: MPL-2.0
//! `translateme_icons` generates the TranslateMe browser-extension icons.
//!
//! Each icon is a filled disc with an inner ring, a crosshair and the glyphs
//! "A" and "中". With the `raster` feature (on by default) the icons are
//! drawn and written as PNG; without it an equivalent SVG is written
//! instead.

pub mod app;
pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
#[cfg(feature = "raster")]
pub mod raster;
pub mod svg;

pub use backend::Backend;
pub use generator::{create_icon, GeneratedIcon, Generator, IconJob};
pub use geometry::{IconGeometry, IconSize};
