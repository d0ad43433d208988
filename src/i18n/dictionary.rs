// SPDX-License-Identifier: MPL-2.0
//! Per-locale translation dictionaries backed by Fluent bundles.
//!
//! A key either names a message (`app-title`) or one of its attributes
//! (`navigation.home`), which is how nested mappings are expressed in Fluent.

use super::locale::LocaleCode;
use crate::error::{Error, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::fmt;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct Dictionary {
    locale: LocaleCode,
    bundle: FluentBundle<FluentResource>,
}

impl fmt::Debug for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl Dictionary {
    /// Builds a dictionary from Fluent source.
    ///
    /// Malformed entries are dropped with a warning; the rest of the source
    /// stays usable and the dropped keys simply read as missing.
    pub fn from_source(locale: LocaleCode, source: String) -> Self {
        let resource = match FluentResource::try_new(source) {
            Ok(resource) => resource,
            Err((resource, errors)) => {
                tracing::warn!(
                    %locale,
                    errors = errors.len(),
                    "dictionary contains malformed entries"
                );
                resource
            }
        };

        let mut bundle = FluentBundle::new(vec![locale.language_identifier()]);
        bundle.set_use_isolating(false);
        bundle.add_resource_overriding(resource);

        Self { locale, bundle }
    }

    /// Loads the dictionary compiled into the binary for `locale`.
    pub fn bundled(locale: LocaleCode) -> Result<Self> {
        let filename = format!("{}.ftl", locale);
        let content = Asset::get(&filename).ok_or_else(|| {
            Error::Dictionary(format!("no bundled dictionary for '{}'", locale))
        })?;
        let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
        Ok(Self::from_source(locale, source))
    }

    pub fn locale(&self) -> LocaleCode {
        self.locale
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.get_with_args(key, None)
    }

    pub fn get_with_args(&self, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let (id, attribute) = match key.split_once('.') {
            Some((id, attribute)) => (id, Some(attribute)),
            None => (key, None),
        };

        let message = self.bundle.get_message(id)?;
        let pattern = match attribute {
            Some(name) => message.get_attribute(name)?.value(),
            None => message.value()?,
        };

        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            tracing::debug!(locale = %self.locale, key, "formatting failed");
            None
        }
    }
}
