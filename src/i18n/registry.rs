// SPDX-License-Identifier: MPL-2.0
//! Registration of dictionary suppliers and one-shot initialization.

use super::dictionary::Dictionary;
use super::locale::{LocaleCode, FALLBACK_LOCALE};
use super::localizer::Localizer;
use crate::error::{Error, Result};
use futures_util::future::{self, LocalBoxFuture};
use futures_util::FutureExt;
use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::path::Path;

pub type DictionaryFuture = LocalBoxFuture<'static, Result<Dictionary>>;

/// Zero-argument supplier yielding a locale's dictionary.
pub type DictionarySupplier = Box<dyn Fn() -> DictionaryFuture>;

/// Locale selection handed to [`LocaleRegistry::init`].
///
/// The fallback is always [`FALLBACK_LOCALE`]; only the initial locale varies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleOptions {
    /// Host-reported language tag; unsupported or missing tags resolve to the fallback.
    pub initial_locale: Option<String>,
}

impl LocaleOptions {
    pub fn with_initial_locale(initial_locale: Option<String>) -> Self {
        Self { initial_locale }
    }

    pub fn fallback_locale(&self) -> LocaleCode {
        FALLBACK_LOCALE
    }
}

/// Maps each locale to the supplier of its dictionary.
///
/// Entries are only ever added; registering a code twice replaces its supplier.
/// [`init`](Self::init) consumes the registry, so a registry is initialized once.
#[derive(Default)]
pub struct LocaleRegistry {
    suppliers: BTreeMap<LocaleCode, DictionarySupplier>,
}

impl fmt::Debug for LocaleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleRegistry")
            .field("locales", &self.codes())
            .finish()
    }
}

impl LocaleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers every supported locale with its dictionary compiled into the binary.
    pub fn bundled() -> Self {
        let mut registry = Self::new();
        for code in LocaleCode::ALL {
            registry.register(code, move || future::ready(Dictionary::bundled(code)));
        }
        registry
    }

    /// Registers every supported locale with a supplier reading `<dir>/<code>.ftl`.
    pub fn from_directory(dir: &Path) -> Self {
        let mut registry = Self::new();
        for code in LocaleCode::ALL {
            let path = dir.join(format!("{}.ftl", code));
            registry.register(code, move || {
                let path = path.clone();
                async move {
                    let source = tokio::fs::read_to_string(&path).await.map_err(|err| {
                        Error::Dictionary(format!("{}: {}", path.display(), err))
                    })?;
                    Ok(Dictionary::from_source(code, source))
                }
            });
        }
        registry
    }

    pub fn register<F, Fut>(&mut self, code: LocaleCode, supplier: F)
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<Dictionary>> + 'static,
    {
        tracing::trace!(%code, "registering locale");
        self.suppliers.insert(code, Box::new(move || supplier().boxed_local()));
    }

    pub fn contains(&self, code: LocaleCode) -> bool {
        self.suppliers.contains_key(&code)
    }

    pub fn codes(&self) -> Vec<LocaleCode> {
        self.suppliers.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }

    /// Resolves the fallback and initial dictionaries and returns the ready localizer.
    ///
    /// Only the suppliers of the fallback and initial locales are invoked. A
    /// failing initial supplier degrades to the fallback; a missing or failing
    /// fallback is an error.
    pub async fn init(self, options: LocaleOptions) -> Result<Localizer> {
        let fallback = options.fallback_locale();
        let fallback_supplier = self.suppliers.get(&fallback).ok_or_else(|| {
            Error::Locale(format!("fallback locale '{}' is not registered", fallback))
        })?;
        let fallback_dictionary = fallback_supplier().await?;

        let requested = options.initial_locale.as_deref();
        let active_dictionary = match requested.and_then(LocaleCode::from_tag) {
            Some(code) if code == fallback => None,
            Some(code) => match self.suppliers.get(&code) {
                Some(supplier) => match supplier().await {
                    Ok(dictionary) => Some(dictionary),
                    Err(err) => {
                        tracing::warn!(
                            %code,
                            error = %err,
                            "initial locale unavailable, using fallback"
                        );
                        None
                    }
                },
                None => {
                    tracing::warn!(%code, "initial locale not registered, using fallback");
                    None
                }
            },
            None => {
                tracing::debug!(
                    requested,
                    %fallback,
                    "no supported initial locale, using fallback"
                );
                None
            }
        };

        let localizer = Localizer::new(fallback_dictionary, active_dictionary, self.codes());
        tracing::info!(
            active = %localizer.active_locale(),
            fallback = %localizer.fallback_locale(),
            "localization initialized"
        );
        Ok(localizer)
    }
}
