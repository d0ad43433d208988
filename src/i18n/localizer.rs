// SPDX-License-Identifier: MPL-2.0
use super::dictionary::Dictionary;
use super::locale::LocaleCode;
use fluent_bundle::FluentArgs;

/// The initialized localization state: active and fallback dictionaries plus
/// the set of locales that were registered.
#[derive(Debug)]
pub struct Localizer {
    fallback: Dictionary,
    active: Option<Dictionary>,
    registered: Vec<LocaleCode>,
}

impl Localizer {
    pub(crate) fn new(
        fallback: Dictionary,
        active: Option<Dictionary>,
        registered: Vec<LocaleCode>,
    ) -> Self {
        Self {
            fallback,
            active,
            registered,
        }
    }

    pub fn active_locale(&self) -> LocaleCode {
        self.active
            .as_ref()
            .map_or(self.fallback.locale(), Dictionary::locale)
    }

    pub fn fallback_locale(&self) -> LocaleCode {
        self.fallback.locale()
    }

    pub fn registered_locales(&self) -> &[LocaleCode] {
        &self.registered
    }

    pub fn is_registered(&self, code: LocaleCode) -> bool {
        self.registered.contains(&code)
    }

    /// Translates `key`, falling back to the fallback dictionary and finally to the key itself.
    pub fn tr(&self, key: &str) -> String {
        self.lookup(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &FluentArgs) -> String {
        self.lookup(key, Some(args))
    }

    /// Native name of the active language.
    pub fn language_name(&self) -> String {
        self.tr("language-name")
    }

    fn lookup(&self, key: &str, args: Option<&FluentArgs>) -> String {
        self.active
            .iter()
            .chain(std::iter::once(&self.fallback))
            .find_map(|dictionary| dictionary.get_with_args(key, args))
            .unwrap_or_else(|| {
                tracing::debug!(key, locale = %self.active_locale(), "missing translation");
                key.to_string()
            })
    }
}
