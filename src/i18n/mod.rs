// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It registers one dictionary supplier per supported locale, resolves the initial
//! locale from the host, and hands out an owned [`Localizer`].
//!
//! # Features
//!
//! - Five bundled locales (`en`, `pt`, `es`, `fr`, `zh`) embedded at build time
//! - Optional dictionary directory replacing the bundled `.ftl` files
//! - Initial locale from CLI, config, or system settings
//! - Fallback to `en` when a locale or key is missing

pub mod dictionary;
pub mod host;
pub mod locale;
pub mod localizer;
pub mod registry;

pub use dictionary::Dictionary;
pub use host::{FixedLanguage, HostLanguage, SystemLanguage};
pub use locale::{LocaleCode, FALLBACK_LOCALE};
pub use localizer::Localizer;
pub use registry::{LocaleOptions, LocaleRegistry};

use crate::config::Config;
use crate::error::Result;
use std::path::Path;

/// Registers every supported locale and initializes localization.
///
/// Dictionaries come from `dictionary_dir` when given, otherwise from the
/// copies compiled into the binary.
pub async fn initialize(
    options: LocaleOptions,
    dictionary_dir: Option<&Path>,
) -> Result<Localizer> {
    let registry = match dictionary_dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "using dictionary directory");
            LocaleRegistry::from_directory(dir)
        }
        None => LocaleRegistry::bundled(),
    };
    tracing::debug!(locales = ?registry.codes(), "locale registry ready");
    registry.init(options).await
}

/// Picks the initial language tag: CLI flag, then config, then host preference.
///
/// The first candidate naming a supported locale wins. When none does, the
/// host preference is passed through so initialization falls back visibly.
pub fn resolve_initial_language(
    cli_lang: Option<String>,
    config: &Config,
    host: &dyn HostLanguage,
) -> Option<String> {
    let host_lang = host.preferred_language();
    let candidates = [cli_lang, config.general.language.clone(), host_lang.clone()];

    candidates
        .into_iter()
        .flatten()
        .find(|tag| LocaleCode::from_tag(tag).is_some())
        .or(host_lang)
}
