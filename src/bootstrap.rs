// SPDX-License-Identifier: MPL-2.0
//! Application start-up sequence.
//!
//! Localization is initialized first, as an explicit step, and only then is the
//! root component attached to its host element. A missing host element aborts
//! the start-up after localization has already completed.

use crate::app::{App, Flags};
use crate::config::{
    self, APP_ELEMENT_ID, DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_HEIGHT,
    MIN_WINDOW_WIDTH,
};
use crate::error::{Error, Result};
use crate::i18n::{self, HostLanguage, LocaleOptions, Localizer};
use iced::{window, Size};
use std::path::PathBuf;

/// Host document: elements the root component can be mounted into.
pub trait Document {
    type Target;

    fn element_by_id(&self, id: &str) -> Option<Self::Target>;
}

/// Native host document whose elements are top-level windows.
#[derive(Debug, Clone, Default)]
pub struct WindowDocument {
    elements: Vec<(String, window::Settings)>,
}

impl WindowDocument {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Document declaring the `app` window the root component mounts into.
    pub fn standard() -> Self {
        Self::empty().with_element(APP_ELEMENT_ID, app_window_settings())
    }

    pub fn with_element(mut self, id: impl Into<String>, settings: window::Settings) -> Self {
        let id = id.into();
        self.elements.retain(|(existing, _)| *existing != id);
        self.elements.push((id, settings));
        self
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|(id, _)| id.as_str())
    }
}

impl Document for WindowDocument {
    type Target = window::Settings;

    fn element_by_id(&self, id: &str) -> Option<Self::Target> {
        self.elements
            .iter()
            .find(|(element_id, _)| element_id == id)
            .map(|(_, settings)| settings.clone())
    }
}

/// Window settings of the `app` host element.
pub fn app_window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Everything the start-up sequence needs, resolved from flags, config and host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Startup {
    pub locale: LocaleOptions,
    pub dictionary_dir: Option<PathBuf>,
    /// Translation key of a notice to show once mounted.
    pub notice: Option<String>,
}

impl Startup {
    pub fn from_flags(flags: Flags, host: &dyn HostLanguage) -> Self {
        let (config, notice) = config::load_with_override(flags.config_dir);
        let initial_locale = i18n::resolve_initial_language(flags.lang, &config, host);

        Self {
            locale: LocaleOptions::with_initial_locale(initial_locale),
            dictionary_dir: flags.i18n_dir.or(config.i18n.dictionary_dir),
            notice,
        }
    }
}

/// The root component attached to its host element.
#[derive(Debug)]
pub struct Mounted<T> {
    pub app: App,
    pub target: T,
}

impl Mounted<window::Settings> {
    /// Hands the mounted component over to the Iced runtime.
    pub fn run(self) -> iced::Result {
        self.app.run(self.target)
    }
}

/// Attaches a root component built from `localizer` to the `app` element of `document`.
pub fn mount<D: Document>(
    document: &D,
    localizer: Localizer,
    notice: Option<String>,
) -> Result<Mounted<D::Target>> {
    let target = document
        .element_by_id(APP_ELEMENT_ID)
        .ok_or_else(|| Error::MountTargetMissing(APP_ELEMENT_ID.to_string()))?;

    let app = App::new(localizer, notice);
    tracing::info!(
        element = APP_ELEMENT_ID,
        locale = %app.localizer().active_locale(),
        "root component mounted"
    );
    Ok(Mounted { app, target })
}

/// Initializes localization, then mounts the root component.
pub async fn start<D: Document>(document: &D, startup: Startup) -> Result<Mounted<D::Target>> {
    let localizer = i18n::initialize(startup.locale, startup.dictionary_dir.as_deref()).await?;
    mount(document, localizer, startup.notice)
}
