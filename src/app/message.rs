// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Result;
use std::path::PathBuf;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Show or hide the active/fallback language summary.
    ToggleDetails,
    /// Hide the start-up notice (e.g. unreadable settings file).
    DismissNotice,
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// Optional locale tag from `--lang`.
    pub lang: Option<String>,
    /// Optional dictionary directory from `--i18n-dir`.
    pub i18n_dir: Option<PathBuf>,
    /// Optional config directory from `--config-dir`.
    pub config_dir: Option<PathBuf>,
}

impl Flags {
    /// Reads the flags from command-line arguments. Unknown trailing arguments are ignored.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self> {
        let flags = Self {
            lang: args.opt_value_from_str("--lang")?,
            i18n_dir: args.opt_value_from_str("--i18n-dir")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
        };

        let remaining = args.finish();
        if !remaining.is_empty() {
            tracing::warn!(?remaining, "ignoring unrecognized arguments");
        }
        Ok(flags)
    }
}
