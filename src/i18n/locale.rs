// SPDX-License-Identifier: MPL-2.0
//! The closed set of locales the application ships dictionaries for.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use unic_langid::{langid, LanguageIdentifier};

/// A supported locale. The set is fixed at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LocaleCode {
    En,
    Pt,
    Es,
    Fr,
    Zh,
}

/// Locale used when the requested locale or key is unavailable.
pub const FALLBACK_LOCALE: LocaleCode = LocaleCode::En;

impl LocaleCode {
    /// Every supported locale, in registration order.
    pub const ALL: [LocaleCode; 5] = [
        LocaleCode::En,
        LocaleCode::Pt,
        LocaleCode::Es,
        LocaleCode::Fr,
        LocaleCode::Zh,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LocaleCode::En => "en",
            LocaleCode::Pt => "pt",
            LocaleCode::Es => "es",
            LocaleCode::Fr => "fr",
            LocaleCode::Zh => "zh",
        }
    }

    pub fn language_identifier(self) -> LanguageIdentifier {
        match self {
            LocaleCode::En => langid!("en"),
            LocaleCode::Pt => langid!("pt"),
            LocaleCode::Es => langid!("es"),
            LocaleCode::Fr => langid!("fr"),
            LocaleCode::Zh => langid!("zh"),
        }
    }

    /// Maps a host language tag onto a supported locale by its primary language.
    ///
    /// Accepts BCP 47 tags (`fr-FR`, `zh-Hans-CN`) as well as POSIX locale
    /// names (`pt_BR.UTF-8`, `es_ES@euro`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .trim()
            .replace('_', "-");
        if tag.is_empty() {
            return None;
        }

        let language = match tag.parse::<LanguageIdentifier>() {
            Ok(langid) => langid.language.as_str().to_string(),
            Err(_) => return None,
        };

        Self::ALL
            .into_iter()
            .find(|code| code.as_str() == language)
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocaleCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s).ok_or_else(|| Error::Locale(format!("unsupported locale '{}'", s)))
    }
}
