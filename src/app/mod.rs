// SPDX-License-Identifier: MPL-2.0
//! Root UI component.
//!
//! `App` owns the [`Localizer`] produced at start-up; every string it renders
//! goes through it, so translations are in place before the first frame.

mod message;
mod view;

pub use message::{Flags, Message};

use crate::i18n::Localizer;
use fluent_bundle::FluentArgs;
use iced::{window, Element};
use std::fmt;

pub struct App {
    localizer: Localizer,
    notice: Option<String>,
    show_details: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.localizer.active_locale())
            .field("notice", &self.notice)
            .field("show_details", &self.show_details)
            .finish()
    }
}

impl App {
    /// Builds the root component. `notice` is a translation key shown until dismissed.
    pub fn new(localizer: Localizer, notice: Option<String>) -> Self {
        Self {
            localizer,
            notice,
            show_details: false,
        }
    }

    pub fn localizer(&self) -> &Localizer {
        &self.localizer
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn show_details(&self) -> bool {
        self.show_details
    }

    pub fn title(&self) -> String {
        self.localizer.tr("window-title")
    }

    pub fn details_label(&self) -> String {
        if self.show_details {
            self.localizer.tr("app-details-hide")
        } else {
            self.localizer.tr("app-details-show")
        }
    }

    pub fn status_line(&self) -> String {
        let mut args = FluentArgs::new();
        args.set("locale", self.localizer.language_name());
        args.set("fallback", self.localizer.fallback_locale().as_str());
        self.localizer.tr_with_args("app-locale-status", &args)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::ToggleDetails => self.show_details = !self.show_details,
            Message::DismissNotice => self.notice = None,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Runs the Iced event loop with this component in a window built from `window`.
    pub fn run(self, window: window::Settings) -> iced::Result {
        use std::cell::RefCell;

        // iced requires an `Fn` boot function; the component is handed over once.
        let boot_state = RefCell::new(Some(self));
        let boot = move || {
            boot_state
                .borrow_mut()
                .take()
                .expect("Boot function called more than once")
        };

        iced::application(boot, App::update, App::view)
            .title(App::title)
            .window(window)
            .run()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{LocaleOptions, LocaleRegistry};

    async fn app_in(lang: &str, notice: Option<&str>) -> App {
        let localizer = LocaleRegistry::bundled()
            .init(LocaleOptions::with_initial_locale(Some(lang.to_string())))
            .await
            .expect("init");
        App::new(localizer, notice.map(str::to_string))
    }

    #[tokio::test]
    async fn toggle_details_flips_label() {
        let mut app = app_in("en", None).await;
        assert_eq!(app.details_label(), "Show language details");

        app.update(Message::ToggleDetails);
        assert!(app.show_details());
        assert_eq!(app.details_label(), "Hide language details");

        app.update(Message::ToggleDetails);
        assert!(!app.show_details());
    }

    #[tokio::test]
    async fn dismiss_notice_clears_it() {
        let mut app = app_in("es", Some("notification-config-load-error")).await;
        assert_eq!(app.notice(), Some("notification-config-load-error"));

        app.update(Message::DismissNotice);
        assert!(app.notice().is_none());
    }

    #[tokio::test]
    async fn status_line_names_active_language_and_fallback() {
        let app = app_in("fr-CA", None).await;
        assert_eq!(app.status_line(), "Langue active : Français (repli : en)");
    }

    #[tokio::test]
    async fn title_comes_from_dictionary() {
        let app = app_in("zh", None).await;
        assert_eq!(app.title(), "IcedLingo");
    }
}
