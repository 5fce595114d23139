// SPDX-License-Identifier: MPL-2.0
//! This module handles the optional run configuration, read from a TOML file
//! passed with `--config`.
//!
//! # Examples
//!
//! ```no_run
//! use translateme_icons::config::{self, Config};
//! use std::path::Path;
//!
//! let config = config::load_from_path(Path::new("icons.toml")).unwrap_or_default();
//! println!("writing to {}", config.out_dir().display());
//! ```

pub mod defaults;

use crate::backend::BackendPreference;
use crate::error::Result;
use defaults::{DEFAULT_FILE_STEM, DEFAULT_FONT_FAMILY, DEFAULT_OUT_DIR, DEFAULT_SIZES};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub out_dir: Option<PathBuf>,
    #[serde(default)]
    pub sizes: Option<Vec<u32>>,
    #[serde(default)]
    pub file_stem: Option<String>,
    #[serde(default)]
    pub font_family: Option<String>,
    #[serde(default)]
    pub backend: Option<BackendPreference>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            out_dir: Some(PathBuf::from(DEFAULT_OUT_DIR)),
            sizes: Some(DEFAULT_SIZES.to_vec()),
            file_stem: Some(DEFAULT_FILE_STEM.to_string()),
            font_family: Some(DEFAULT_FONT_FAMILY.to_string()),
            backend: Some(BackendPreference::Auto),
        }
    }
}

impl Config {
    #[must_use]
    pub fn out_dir(&self) -> PathBuf {
        self.out_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    #[must_use]
    pub fn sizes(&self) -> &[u32] {
        self.sizes.as_deref().unwrap_or(DEFAULT_SIZES)
    }

    #[must_use]
    pub fn file_stem(&self) -> &str {
        self.file_stem.as_deref().unwrap_or(DEFAULT_FILE_STEM)
    }

    #[must_use]
    pub fn font_family(&self) -> &str {
        self.font_family.as_deref().unwrap_or(DEFAULT_FONT_FAMILY)
    }

    #[must_use]
    pub fn backend(&self) -> BackendPreference {
        self.backend.unwrap_or_default()
    }
}

/// Reads a config file named by the user.
///
/// # Errors
///
/// [`Error::Io`](crate::error::Error::Io) when the file cannot be read,
/// [`Error::Config`](crate::error::Error::Config) when it is not valid TOML
/// or a field has the wrong type.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
