// SPDX-License-Identifier: MPL-2.0
//! `iced_lingo` is a localized application shell built with the Iced GUI framework.
//!
//! At start-up it registers the bundled Fluent dictionaries, resolves the
//! initial locale from the command line, user settings or the operating system,
//! and mounts the root view with an owned [`i18n::Localizer`].

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod i18n;
