// SPDX-License-Identifier: MPL-2.0
use iced_lingo::app::Flags;
use iced_lingo::bootstrap::{self, Document, Startup, WindowDocument};
use iced_lingo::config::{self, Config, GeneralConfig};
use iced_lingo::error::Error;
use iced_lingo::i18n::{
    self, FixedLanguage, LocaleCode, LocaleOptions, LocaleRegistry, FALLBACK_LOCALE,
};
use std::cell::RefCell;
use tempfile::tempdir;

/// Document that records every element lookup.
#[derive(Default)]
struct RecordingDocument {
    lookups: RefCell<Vec<String>>,
    has_app: bool,
}

impl Document for RecordingDocument {
    type Target = ();

    fn element_by_id(&self, id: &str) -> Option<()> {
        self.lookups.borrow_mut().push(id.to_string());
        self.has_app.then_some(())
    }
}

async fn start_with_host(tag: &str) -> bootstrap::Mounted<()> {
    let dir = tempdir().expect("failed to create temp dir");
    let flags = Flags {
        config_dir: Some(dir.path().to_path_buf()),
        ..Flags::default()
    };
    let startup = Startup::from_flags(flags, &FixedLanguage::new(tag));
    let document = RecordingDocument {
        has_app: true,
        ..RecordingDocument::default()
    };
    bootstrap::start(&document, startup).await.expect("start")
}

#[test]
fn every_supported_locale_is_registered_before_init() {
    let registry = LocaleRegistry::bundled();
    assert_eq!(registry.codes(), LocaleCode::ALL.to_vec());
}

#[tokio::test]
async fn host_french_selects_french_dictionary() {
    let mounted = start_with_host("fr").await;
    let localizer = mounted.app.localizer();

    assert_eq!(localizer.active_locale(), LocaleCode::Fr);
    assert_eq!(localizer.tr("app-greeting"), "Cette application parle votre langue.");
    assert_eq!(localizer.tr("navigation.about"), "À propos");
}

#[tokio::test]
async fn host_german_falls_back_to_english() {
    let mounted = start_with_host("de").await;
    let localizer = mounted.app.localizer();

    assert_eq!(localizer.active_locale(), LocaleCode::En);
    assert_eq!(localizer.tr("app-title"), "Welcome");
}

#[tokio::test]
async fn fallback_is_english_for_every_host_language() {
    for tag in ["en", "pt", "es", "fr", "zh", "de", "ja-JP", ""] {
        let mounted = start_with_host(tag).await;
        assert_eq!(mounted.app.localizer().fallback_locale(), FALLBACK_LOCALE);
        assert_eq!(FALLBACK_LOCALE.as_str(), "en");
    }
}

#[tokio::test]
async fn missing_mount_target_fails_after_registration() {
    let document = RecordingDocument::default();

    let localizer = i18n::initialize(LocaleOptions::with_initial_locale(Some("pt".into())), None)
        .await
        .expect("initialize");
    assert_eq!(localizer.registered_locales(), &LocaleCode::ALL);
    assert_eq!(localizer.active_locale(), LocaleCode::Pt);

    let result = bootstrap::mount(&document, localizer, None);
    assert!(matches!(result, Err(Error::MountTargetMissing(_))));
    assert_eq!(document.lookups.borrow().as_slice(), ["app".to_string()]);
}

#[tokio::test]
async fn start_looks_up_the_app_element_once() {
    let document = RecordingDocument::default();
    let result = bootstrap::start(&document, Startup::default()).await;

    assert!(result.is_err());
    assert_eq!(document.lookups.borrow().len(), 1);
}

#[tokio::test]
async fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let flags = || Flags {
        config_dir: Some(dir.path().to_path_buf()),
        ..Flags::default()
    };

    let english = Config {
        general: GeneralConfig {
            language: Some("en".to_string()),
        },
        ..Config::default()
    };
    config::save_with_override(&english, Some(dir.path().to_path_buf()))
        .expect("Failed to write initial config file");
    let mounted = bootstrap::start(
        &WindowDocument::standard(),
        Startup::from_flags(flags(), &FixedLanguage::new("zh")),
    )
    .await
    .expect("start");
    assert_eq!(mounted.app.localizer().active_locale(), LocaleCode::En);

    let spanish = Config {
        general: GeneralConfig {
            language: Some("es-MX".to_string()),
        },
        ..Config::default()
    };
    config::save_with_override(&spanish, Some(dir.path().to_path_buf()))
        .expect("Failed to write spanish config file");
    let mounted = bootstrap::start(
        &WindowDocument::standard(),
        Startup::from_flags(flags(), &FixedLanguage::new("zh")),
    )
    .await
    .expect("start");
    assert_eq!(mounted.app.localizer().active_locale(), LocaleCode::Es);

    dir.close().expect("Failed to close temporary directory");
}
