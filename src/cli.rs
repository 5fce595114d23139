// SPDX-License-Identifier: MPL-2.0
//! Command-line flags.
//!
//! Running with no arguments writes the three standard icons into the
//! working directory. Flags only override that.

use crate::backend::BackendPreference;
use crate::config::Config;
use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::PathBuf;

pub const HELP: &str = "\
Generate the TranslateMe extension icons (icon16, icon48, icon128).

USAGE:
    translateme-icons [OPTIONS]

OPTIONS:
    --out-dir <DIR>     Directory to write the icons to (default: .)
    --config <FILE>     TOML file with out_dir, sizes, file_stem, font_family, backend
    --svg               Write SVG icons even when PNG output is available
    -h, --help          Print this help
";

/// Runtime flags parsed from the command line.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Flags {
    /// Output directory override.
    pub out_dir: Option<PathBuf>,
    /// Optional config file.
    pub config: Option<PathBuf>,
    /// Force the SVG fallback.
    pub force_svg: bool,
    pub help: bool,
}

impl Flags {
    pub fn from_env() -> Result<Self> {
        Self::parse(pico_args::Arguments::from_env())
    }

    pub fn from_vec(args: Vec<OsString>) -> Result<Self> {
        Self::parse(pico_args::Arguments::from_vec(args))
    }

    fn parse(mut args: pico_args::Arguments) -> Result<Self> {
        let flags = Flags {
            help: args.contains(["-h", "--help"]),
            force_svg: args.contains("--svg"),
            out_dir: args.opt_value_from_str("--out-dir")?,
            config: args.opt_value_from_str("--config")?,
        };

        let remaining = args.finish();
        if let Some(extra) = remaining.first() {
            return Err(Error::Args(format!(
                "unexpected argument: {}",
                extra.to_string_lossy()
            )));
        }
        Ok(flags)
    }

    /// Applies flag overrides on top of a loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.out_dir {
            config.out_dir = Some(dir.clone());
        }
        if self.force_svg {
            config.backend = Some(BackendPreference::Svg);
        }
    }
}
